use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

use edrak::client::Api;
use edrak::core::principal::User;
use edrak::core::Token;
use edrak::{decide, effective_price, AuthState, Policy, Principal, Role, RouteRequirement};

pub fn gate(c: &mut Criterion) {
    let student = AuthState::Authenticated(Principal::User(User::new(
        "u1",
        "Sara",
        Some(Role::Student),
    )));
    let staff_only = Policy::Protected(RouteRequirement::roles([Role::Teacher, Role::Admin]));

    c.bench_function("decide", |b| {
        b.iter(|| {
            decide(
                black_box(&student),
                black_box(&staff_only),
                black_box("/teacher/academy"),
            )
        })
    });
}

pub fn price(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();

    c.bench_function("effective_price", |b| {
        b.iter(|| {
            effective_price(
                black_box(Decimal::from(100)),
                black_box(Decimal::from(80)),
                Some(start),
                Some(end),
                black_box(now),
            )
        })
    });
}

pub fn navigate(c: &mut Criterion) {
    const NUM_NAVIGATE: usize = 100;

    let rt = rt();
    let config: edrak::config::Config = serde_yaml::from_str(
        r#"
portal:
  tokens: [{ token: bench, id: u1, name: Bench, role: teacher }]
  routes:
    - { name: teacher, path: "/teacher/*", roles: [teacher, admin] }
"#,
    )
    .unwrap();

    let navigator = rt.block_on(async {
        let navigator = edrak::config::Initializer::from_config(config)
            .run_portal()
            .unwrap();
        navigator.login(Token::new("bench")).await.unwrap();
        navigator
    });

    c.bench_function("navigate", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..NUM_NAVIGATE {
                    navigator.navigate("/teacher/academy/exams").await.unwrap();
                }
            });
        });
    });
}

fn rt() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
}

criterion_group!(benches, gate, price, navigate);
criterion_main!(benches);

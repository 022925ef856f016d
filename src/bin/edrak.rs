use edrak::{cli, config};

fn init_tracing() {
    use tracing_subscriber::{
        filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt as _, Registry,
    };

    Registry::default()
        .with(
            fmt::Layer::new()
                .with_ansi(true)
                .with_file(false)
                .with_line_number(false)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::try_from_env(config::env::LOG_DIRECTIVE)
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() {
    init_tracing();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .on_thread_start(|| tracing::trace!("thread start"))
        .on_thread_stop(|| tracing::trace!("thread stop"))
        .enable_time()
        .build();

    let runtime = match runtime {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to build runtime: {}", err);
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        run().await;
    })
}

async fn run() {
    if let Err(err) = cli::parse().run().await {
        if err.is_configuration() {
            eprintln!("configuration error: {}", err);
        } else {
            eprintln!("{}", err);
        }
        std::process::exit(err.exit_code());
    };
}

use std::fmt;

// Outcome of an access decision. The caller performs the actual navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    // Authentication is still resolving; neither render nor redirect.
    Pending,
    Allow,
    RedirectToLogin { return_path: String },
    RedirectToUnauthorized,
    RedirectToApp,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Pending => write!(f, "pending"),
            Decision::Allow => write!(f, "allow"),
            Decision::RedirectToLogin { return_path } => {
                write!(f, "redirect to login (return to {})", return_path)
            }
            Decision::RedirectToUnauthorized => write!(f, "redirect to unauthorized"),
            Decision::RedirectToApp => write!(f, "redirect to app"),
        }
    }
}

pub mod bugs;
pub mod checkout;
pub mod page;
pub mod signup;

pub use crate::domain::ports::{CheckoutProvider, IssueTracker, Mailer};
pub use crate::utils::error::Result;

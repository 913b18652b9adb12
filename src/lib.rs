mod algebra;
mod domain;
mod service;

pub use algebra::*;
pub use domain::*;
pub use service::*;

pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::domain::*;
    pub use crate::service::*;
}

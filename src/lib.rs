pub mod clean;
pub mod convert;
pub mod ident;
pub mod source;

pub mod prelude {
    pub use crate::source::Source;
}

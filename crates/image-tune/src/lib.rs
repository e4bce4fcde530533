mod cropper;
mod dom;
mod host;
mod resize;
mod state;
mod style;
mod tune;

pub use crate::cropper::*;
pub use crate::dom::*;
pub use crate::host::*;
pub use crate::resize::*;
pub use crate::state::*;
pub use crate::style::*;
pub use crate::tune::*;

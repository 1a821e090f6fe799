//! Types shared by the heatmap's shader program and its host-side setup code.

#![cfg_attr(not(test), no_std)]

mod gradient;
mod vertex;

pub use self::gradient::*;
pub use self::vertex::*;

pub mod prelude {
    pub use glam::*;

    pub use crate::*;
}

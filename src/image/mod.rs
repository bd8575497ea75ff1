pub mod f32;
pub mod io;
pub mod mask;
pub mod rgb;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::io::RgbImageBuf;
pub use self::mask::Mask;
pub use self::rgb::ImageRgb8;
pub use self::traits::{ImageView, ImageViewMut};

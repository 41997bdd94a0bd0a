//! Testimonial marquee: a responsive grid of endlessly scrolling review
//! columns that reveals itself the first time it scrolls into view.

mod assets;
pub use assets::{DECORATION_IMAGE, TESTIMONIAL_IMAGES};

pub mod delay;
pub mod layout;
pub mod reveal;
pub mod timing;

mod view;
pub use view::{ReviewColumn, ReviewGrid, Reviews};

/// Customer photos shown in the marquee, served from the host's static root.
pub const TESTIMONIAL_IMAGES: [&str; 6] = [
    "/testimonials/1.jpg",
    "/testimonials/2.jpg",
    "/testimonials/3.jpg",
    "/testimonials/4.jpg",
    "/testimonials/5.jpg",
    "/testimonials/6.jpg",
];

/// Side illustration, only shown on extra-wide viewports.
pub const DECORATION_IMAGE: &str = "/what-people-are-buying.png";

pub mod rgba_image;

pub mod material;
pub mod phong;

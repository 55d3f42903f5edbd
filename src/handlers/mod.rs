pub mod meals;
pub mod system;

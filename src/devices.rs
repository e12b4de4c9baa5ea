// External chips on the board: display controller and touch controller.

pub mod ft6206;
pub mod ili9341;

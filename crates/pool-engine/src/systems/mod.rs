pub mod aim;
pub mod collision;
pub mod integrator;
pub mod pockets;
pub mod turn;

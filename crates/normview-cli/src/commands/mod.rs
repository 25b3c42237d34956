pub mod crush;
pub mod flavours;
pub mod table;

// Domain layer: sale records, the report shape and the ports the ETL shell plugs into.

pub mod model;
pub mod ports;
pub mod sample;

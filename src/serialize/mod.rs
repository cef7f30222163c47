mod hex_u_int;

pub(crate) use hex_u_int::serialize as hex_u_int;

pub mod json;
pub mod option_time_ser;
pub mod rect;

#[cfg(test)]
pub mod test_util;

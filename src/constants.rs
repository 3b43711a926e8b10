pub const DEFAULT_NPT: usize = 100;
pub const MIN_NPT: usize = 2;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// объёмы синтетических данных: последний кодпоинт UnicodeData и количество записей SpecialCasing
pub const SIZES: [(u32, u32); 3] = [(0xFFF, 16), (0xFFFF, 64), (0x2FFFF, 128)];

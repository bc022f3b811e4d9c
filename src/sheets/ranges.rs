// For now, the range is hardcoded to keep the sheet layout in one place

pub const RO_DATA: &str = "Data";

/// Tag for the Custom Config Updated event.
pub const CONFIG_UPDATED_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Manage Authority event.
pub const AUTHORITY_UPDATED_TAG: u8 = u8::MAX - 6;

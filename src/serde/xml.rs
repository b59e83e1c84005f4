use std::fmt::Write;

use quick_xml::DeError;
use serde::ser::Serialize;

pub const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

pub fn to_writer<W: Write, S: Serialize + ?Sized>(mut writer: W, value: &S) -> Result<(), DeError> {
    writer
        .write_str(HEADER)
        .map_err(|e| DeError::Custom(e.to_string()))?;
    quick_xml::se::to_writer(writer, &value)?;
    Ok(())
}

pub fn to_string<S: Serialize + ?Sized>(value: &S) -> Result<String, DeError> {
    let mut writer = String::new();
    to_writer(&mut writer, value)?;
    Ok(writer)
}

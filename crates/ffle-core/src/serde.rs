#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::bit_depth::BitDepth;
use crate::options::DecoderOptions;

impl Serialize for BitDepth
{
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // bit depth serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for DecoderOptions
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("DecoderOptions", 3)?;
        state.serialize_field("max_width", &self.max_width())?;
        state.serialize_field("max_height", &self.max_height())?;
        state.serialize_field("strict_mode", &self.strict_mode())?;
        state.end()
    }
}

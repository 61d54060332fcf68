/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::image::ImageHeader;

impl Serialize for ImageHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 5;
        let mut state = serializer.serialize_struct("ImageHeader", STRUCT_FIELDS)?;

        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("magic", &self.kind.to_string())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("maxval", &self.maxval)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use netpbm_core::kind::NetPbmKind;

    use crate::image::Image;

    #[test]
    fn header_serializes_to_json() {
        let image = Image::fill(0, NetPbmKind::BinaryPixmap, 3, 2, 255).unwrap();
        let json = serde_json::to_string(&image.header()).unwrap();

        assert_eq!(
            json,
            r#"{"kind":"BinaryPixmap","magic":"P6","width":3,"height":2,"maxval":255}"#
        );
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::{Serialize, Serializer};

use crate::kind::NetPbmKind;

impl Serialize for NetPbmKind {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // kind serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

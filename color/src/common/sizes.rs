// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated containers. Harmonies produce at most four colors and scales are
//! usually a handful of entries, so these rarely spill onto the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated string storage for small strings, eg: the normalized digits of a hex
/// color. When this gets larger than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// A list of hex color strings, eg: the output of a harmony or a scale.
pub type HexColorList = InlineVec<String>;

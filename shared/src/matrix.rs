//! Constant byte matrix sampled while seeding keystream tables.

/// Number of bytes in [`SHIELD_MATRIX`].
pub const MATRIX_SIZE: usize = 0x800;

/// Peers seed from this exact table, so every byte must stay as-is.
#[rustfmt::skip]
pub static SHIELD_MATRIX: [u8; MATRIX_SIZE] = [
    0xef, 0xb2, 0x49, 0x55, 0xb3, 0x07, 0x25, 0x10, 0x02, 0xc3, 0xeb, 0xd4, 0x47, 0x42, 0x0a, 0x32,
    0x22, 0x39, 0x85, 0x52, 0x3b, 0x15, 0x89, 0x27, 0x9f, 0xb8, 0xb5, 0xb8, 0x0c, 0x62, 0x7a, 0x79,
    0x2b, 0xc7, 0x57, 0x44, 0x0b, 0x1e, 0x4f, 0x6a, 0x09, 0xa2, 0xe5, 0x6a, 0xaf, 0xd3, 0x7c, 0x47,
    0x53, 0x73, 0x64, 0x0e, 0x7c, 0x84, 0x6f, 0x02, 0x87, 0xd2, 0x64, 0x81, 0x70, 0xc9, 0x96, 0x9b,
    0xbe, 0x92, 0x0d, 0x5e, 0x0a, 0x50, 0xf3, 0x64, 0xf8, 0xe6, 0x40, 0xa6, 0x56, 0xa4, 0xc8, 0x09,
    0x75, 0x4d, 0xc0, 0xbd, 0x99, 0x42, 0xc6, 0x6a, 0x9d, 0xd4, 0xfa, 0xa7, 0x7b, 0x84, 0x5b, 0x4d,
    0x82, 0x2b, 0xc9, 0x22, 0x50, 0x5b, 0x81, 0xd8, 0x65, 0xfb, 0x5b, 0x05, 0x64, 0xd4, 0x2d, 0x5c,
    0x51, 0x25, 0x1e, 0xf9, 0xe3, 0xf4, 0xbd, 0xf4, 0x46, 0x34, 0xbc, 0x81, 0xc9, 0x5f, 0x87, 0x71,
    0xf3, 0x38, 0x31, 0x42, 0xe4, 0xcd, 0x67, 0x94, 0x83, 0xdf, 0xdd, 0x34, 0xe9, 0x5a, 0xea, 0x1e,
    0x76, 0x6e, 0x41, 0x11, 0x94, 0x17, 0x87, 0x2a, 0x88, 0x79, 0x32, 0x18, 0xda, 0xf8, 0xdf, 0x5b,
    0xb1, 0xf7, 0x2c, 0x28, 0xb0, 0x0b, 0x1b, 0xd9, 0xad, 0xa4, 0xb0, 0x9a, 0xd7, 0x7c, 0x48, 0x1c,
    0x17, 0x31, 0xb5, 0x04, 0xc5, 0x75, 0x5b, 0x05, 0x91, 0xbf, 0x25, 0xac, 0x13, 0xc2, 0xac, 0xd5,
    0x82, 0xba, 0x65, 0xed, 0x7f, 0x4b, 0x14, 0xde, 0x61, 0x71, 0x22, 0x50, 0x85, 0xd8, 0x0e, 0x19,
    0x0a, 0x07, 0xc9, 0x88, 0xf8, 0xb2, 0xf1, 0x77, 0x30, 0x38, 0xa4, 0x2f, 0xbc, 0x06, 0xb7, 0x1b,
    0x4f, 0xe7, 0x4f, 0xe2, 0x85, 0x9a, 0xd0, 0x4e, 0x40, 0x7f, 0xbc, 0xa2, 0x2d, 0x60, 0x8a, 0x4c,
    0x4c, 0x21, 0x0e, 0x87, 0x8e, 0xc3, 0x0c, 0x63, 0xd8, 0x28, 0x05, 0x48, 0x81, 0xda, 0x52, 0xde,
    0x25, 0x77, 0x9b, 0x8b, 0x56, 0x57, 0x50, 0x45, 0x90, 0x9d, 0x1e, 0x90, 0x6c, 0xd6, 0x10, 0xe1,
    0x79, 0x41, 0xd8, 0x20, 0xcf, 0xf2, 0xea, 0x22, 0x23, 0xe5, 0x5c, 0xd0, 0x73, 0xb1, 0xce, 0x46,
    0xb3, 0x77, 0xc4, 0x1f, 0xeb, 0x38, 0x18, 0xd6, 0x3d, 0x2e, 0x9a, 0x4f, 0xc6, 0xd6, 0xf2, 0x77,
    0x57, 0xbf, 0xc6, 0x22, 0xe8, 0xdd, 0x56, 0x7f, 0xcb, 0xdd, 0x06, 0xd7, 0x87, 0x4d, 0x06, 0x67,
    0x51, 0x08, 0x84, 0x09, 0x23, 0x42, 0x31, 0x87, 0xd1, 0x27, 0xf1, 0x47, 0xa1, 0x4b, 0x8d, 0xa0,
    0x4a, 0x87, 0x32, 0x93, 0xe7, 0xf6, 0x17, 0xba, 0x31, 0x12, 0x22, 0xa0, 0x15, 0xc2, 0xd3, 0x52,
    0xf4, 0xdd, 0x5d, 0xe9, 0x3f, 0x52, 0x27, 0xd2, 0x81, 0x92, 0xa3, 0x95, 0xc7, 0xf5, 0xbc, 0x65,
    0x5f, 0x18, 0x41, 0x2f, 0xbf, 0x82, 0xfd, 0x89, 0xd9, 0x16, 0x92, 0x21, 0x57, 0x7f, 0x16, 0x87,
    0x3e, 0xc4, 0x13, 0x92, 0x62, 0x98, 0x8b, 0xa6, 0xa2, 0x10, 0x74, 0x8a, 0xe7, 0x6b, 0x63, 0x3f,
    0x43, 0x84, 0x57, 0xdf, 0xc9, 0x1c, 0x5c, 0x12, 0x6a, 0x11, 0x7f, 0x03, 0x71, 0x40, 0x32, 0xf9,
    0x6c, 0x97, 0x2c, 0x8d, 0x18, 0x18, 0xf1, 0x64, 0x2f, 0x50, 0xee, 0xaa, 0x14, 0x94, 0xe5, 0x9d,
    0xcb, 0x73, 0x9e, 0xca, 0xbf, 0xaf, 0x89, 0x71, 0xb1, 0x40, 0xd2, 0xa5, 0x66, 0x98, 0x8e, 0x94,
    0x63, 0xc9, 0x76, 0x94, 0xcd, 0xa9, 0x74, 0xe1, 0xc3, 0x9a, 0x60, 0x2d, 0x44, 0xad, 0x2f, 0x63,
    0xed, 0xa0, 0x07, 0x42, 0xc1, 0x80, 0xdf, 0xb7, 0x1d, 0x73, 0x3d, 0x9c, 0x9e, 0x6f, 0x17, 0x34,
    0x2e, 0xde, 0x01, 0x97, 0xd4, 0xf6, 0x2e, 0x69, 0x24, 0xc8, 0x58, 0x81, 0xcf, 0xc7, 0xac, 0x68,
    0xc4, 0xdb, 0xc0, 0x51, 0xd1, 0xa3, 0x3e, 0x68, 0xc2, 0x0f, 0x31, 0xac, 0xe6, 0x7f, 0xbc, 0x2a,
    0xf8, 0xf0, 0x21, 0x3a, 0xe1, 0x81, 0xc0, 0xb8, 0xb4, 0x48, 0x2d, 0x45, 0xf6, 0x48, 0xce, 0x78,
    0x0f, 0x08, 0xc4, 0x35, 0x59, 0x82, 0x07, 0xfb, 0x58, 0x8c, 0x65, 0xd1, 0xee, 0x56, 0xf1, 0x3a,
    0x14, 0xac, 0xec, 0xd3, 0x8f, 0x1d, 0xd1, 0x82, 0xfe, 0x9d, 0x77, 0xce, 0xdc, 0x67, 0x8c, 0xcf,
    0xb0, 0x9b, 0x49, 0x60, 0x23, 0x5c, 0xa0, 0x5e, 0xbb, 0xf5, 0xd4, 0xb9, 0x4b, 0x59, 0x2e, 0x9e,
    0xf4, 0x54, 0x43, 0xf0, 0xd8, 0xf0, 0x08, 0xed, 0xb2, 0xdc, 0x15, 0xa5, 0x07, 0xb2, 0xde, 0xa3,
    0x2f, 0x24, 0x4f, 0xf6, 0x5f, 0x41, 0x76, 0x6f, 0xeb, 0x6d, 0xbf, 0xc6, 0x74, 0x3c, 0x6d, 0x04,
    0x34, 0xbb, 0xc2, 0x4f, 0xa2, 0x78, 0x10, 0x12, 0x21, 0x31, 0xa5, 0x86, 0xde, 0x0a, 0xc3, 0x1a,
    0x36, 0x3e, 0x19, 0xd2, 0x1f, 0x18, 0x77, 0x03, 0x8d, 0xa6, 0x29, 0x0f, 0x47, 0x0c, 0x30, 0x0a,
    0x0f, 0xcd, 0x4f, 0x63, 0xae, 0x05, 0x1d, 0xfe, 0x3f, 0x59, 0x90, 0x61, 0xb4, 0xa1, 0x3c, 0x4e,
    0x15, 0x1f, 0xab, 0x01, 0x5b, 0x9a, 0x15, 0x62, 0x67, 0x6a, 0xd6, 0xde, 0x83, 0x27, 0xf8, 0xc7,
    0x66, 0x07, 0x11, 0xd4, 0xa9, 0x38, 0x60, 0x36, 0xa7, 0x26, 0x7d, 0x5c, 0xb9, 0x03, 0xce, 0x50,
    0xbd, 0x0d, 0x51, 0xc4, 0x6f, 0x55, 0x45, 0xc6, 0xe5, 0x14, 0xd5, 0x33, 0x4e, 0xbe, 0x50, 0xc6,
    0x3e, 0x78, 0x75, 0xfe, 0x9f, 0x8b, 0x16, 0x2e, 0x18, 0x80, 0xd9, 0xcf, 0x84, 0x8b, 0x84, 0xa1,
    0xc7, 0xe3, 0x18, 0x12, 0x1b, 0xab, 0x05, 0x64, 0x98, 0x14, 0xf3, 0x40, 0x30, 0xdb, 0xc0, 0x02,
    0xc1, 0x48, 0xab, 0x72, 0x81, 0x4a, 0xf7, 0xd0, 0xf2, 0xdf, 0x56, 0x46, 0x8e, 0xeb, 0x6c, 0xba,
    0x6e, 0x12, 0x52, 0x92, 0x80, 0x52, 0xd1, 0x5b, 0x34, 0x6e, 0xc4, 0x69, 0x14, 0xd7, 0xda, 0xea,
    0x3b, 0xae, 0xa8, 0xf0, 0x25, 0x94, 0xc7, 0xfa, 0x3d, 0xd3, 0xe8, 0x82, 0xb8, 0x28, 0x95, 0x05,
    0x8f, 0x1b, 0x17, 0xa4, 0xa7, 0xd3, 0x2e, 0xc5, 0x10, 0xbc, 0x20, 0x4c, 0x4c, 0xe1, 0x31, 0x66,
    0x9d, 0xf8, 0xa2, 0xf2, 0xc3, 0x5c, 0x4a, 0x7f, 0x21, 0xfe, 0xca, 0xf7, 0x43, 0x98, 0x97, 0xe0,
    0x2f, 0x18, 0xbe, 0x59, 0x7d, 0x8d, 0x21, 0xae, 0xa7, 0x2a, 0x20, 0x37, 0x8b, 0x7d, 0x5d, 0x4f,
    0x7b, 0x09, 0x18, 0xa3, 0x7a, 0x6c, 0xc8, 0xa5, 0xec, 0x17, 0xf8, 0x4f, 0xd5, 0x6c, 0x8c, 0x21,
    0xf2, 0x31, 0x69, 0xf5, 0x4f, 0xb1, 0xb4, 0x96, 0x1d, 0x77, 0x23, 0x2a, 0xeb, 0xfe, 0xf8, 0x70,
    0x10, 0x54, 0xc7, 0x62, 0xcb, 0xdd, 0x0e, 0xa5, 0x93, 0xe5, 0x34, 0x64, 0xfa, 0x21, 0x10, 0x8b,
    0x27, 0x28, 0x77, 0xf4, 0x50, 0xc4, 0xf8, 0x72, 0x31, 0x78, 0x4f, 0xdd, 0x68, 0x94, 0x26, 0x0c,
    0xb6, 0x64, 0xb6, 0xc3, 0x1c, 0x22, 0xec, 0xad, 0x28, 0xcb, 0x81, 0xc8, 0x1f, 0x0d, 0x45, 0x5d,
    0x39, 0xcf, 0x10, 0x03, 0x1a, 0xa2, 0x7f, 0xa8, 0x4d, 0x95, 0x88, 0x3c, 0xe0, 0xba, 0x05, 0xd6,
    0x71, 0xd4, 0xab, 0x8e, 0xb4, 0xfa, 0x38, 0x61, 0x67, 0x38, 0x2a, 0xc1, 0x96, 0xd9, 0x52, 0x44,
    0x3d, 0x0e, 0x9c, 0x81, 0xa6, 0xf6, 0x5e, 0x16, 0xfd, 0x4b, 0xfc, 0x64, 0x1c, 0xc4, 0x40, 0xf8,
    0xe4, 0xd7, 0xb3, 0xbe, 0xc4, 0x83, 0xc9, 0x55, 0xac, 0x33, 0xbc, 0x46, 0x96, 0x04, 0x5f, 0xe2,
    0xe9, 0xdf, 0x4c, 0x86, 0xd5, 0xc4, 0xb0, 0x0b, 0x71, 0x2a, 0x99, 0x28, 0xc0, 0xd9, 0x82, 0x12,
    0xd8, 0x34, 0x20, 0x82, 0x5b, 0x24, 0x7d, 0x93, 0x7c, 0xd6, 0x08, 0x03, 0x3b, 0xda, 0x1a, 0xd0,
    0x1a, 0x53, 0x91, 0x5a, 0x6a, 0xe1, 0x96, 0xca, 0xfd, 0x56, 0x91, 0x0e, 0xdb, 0x74, 0xfa, 0x30,
    0xbb, 0x40, 0x02, 0x3f, 0xef, 0x9e, 0x34, 0x1b, 0x7a, 0x50, 0x22, 0x58, 0x80, 0x04, 0x35, 0x19,
    0x4c, 0x0d, 0x21, 0x7d, 0x0b, 0xf6, 0x30, 0x8d, 0x99, 0x07, 0xdc, 0xd0, 0x5d, 0xe2, 0x5e, 0x5a,
    0x1e, 0xeb, 0x35, 0x8b, 0xd9, 0x86, 0xd3, 0xdc, 0x72, 0x64, 0xe5, 0x5c, 0x4b, 0xf8, 0x66, 0x3b,
    0xa3, 0x43, 0xf4, 0x1e, 0x46, 0x82, 0xa6, 0x80, 0xdf, 0x0a, 0x37, 0xde, 0x1a, 0xc9, 0xe3, 0x88,
    0x34, 0xb7, 0xd3, 0x32, 0x58, 0xc3, 0x43, 0xbf, 0xd0, 0x66, 0x6e, 0xd5, 0xdf, 0x06, 0x66, 0xa9,
    0xe6, 0xc0, 0xcd, 0xa3, 0x08, 0xd7, 0x23, 0x42, 0x92, 0xbe, 0x1e, 0x5b, 0xc9, 0x1d, 0x46, 0x29,
    0xd7, 0xb7, 0x3d, 0x34, 0x8a, 0x91, 0x6f, 0x9d, 0xa8, 0xc2, 0x9c, 0x42, 0x6a, 0xca, 0x73, 0x4b,
    0x81, 0x65, 0x2b, 0xa6, 0xa5, 0x1a, 0xd3, 0xe6, 0x94, 0x1a, 0x55, 0x1c, 0x89, 0xa9, 0xc5, 0x9a,
    0x84, 0x16, 0x97, 0x45, 0xf8, 0xfe, 0x4a, 0xc3, 0x2e, 0x76, 0x17, 0xd0, 0x78, 0xbe, 0xce, 0xfa,
    0x81, 0x25, 0xd3, 0xf4, 0xd5, 0xc4, 0xec, 0x76, 0xed, 0xa3, 0x65, 0x2c, 0xd9, 0x8d, 0xa6, 0x35,
    0xdd, 0x90, 0x4a, 0x4a, 0x0b, 0xf1, 0xc6, 0xf4, 0xbc, 0x14, 0x47, 0x68, 0x7b, 0xa7, 0x3f, 0x88,
    0x9a, 0x07, 0xd2, 0x11, 0x34, 0xa3, 0x24, 0x6e, 0x4a, 0x77, 0x17, 0x49, 0x1f, 0x3b, 0x30, 0xbe,
    0x25, 0x78, 0x80, 0xe1, 0x0e, 0x20, 0x5f, 0x66, 0x52, 0x43, 0x58, 0x21, 0xcb, 0x24, 0x8d, 0xb6,
    0x23, 0xa5, 0xf4, 0xaf, 0xc0, 0xdb, 0x34, 0x3d, 0x79, 0x46, 0xfb, 0x66, 0xa0, 0xfa, 0xad, 0x76,
    0x45, 0xb1, 0xab, 0x59, 0x33, 0x15, 0x0f, 0xc3, 0x91, 0xbb, 0x3c, 0xc4, 0xa2, 0x25, 0x07, 0xbb,
    0x17, 0x30, 0x4d, 0xba, 0xdd, 0x60, 0x5b, 0x48, 0x6f, 0xd5, 0xe5, 0x2a, 0x0d, 0x65, 0x6f, 0x0d,
    0x4c, 0x37, 0x7f, 0x36, 0x91, 0x33, 0xd6, 0x29, 0xbd, 0xcd, 0xa8, 0xd6, 0x9e, 0x6d, 0xfc, 0x44,
    0x93, 0xeb, 0xb2, 0x4e, 0xd3, 0x7b, 0xdd, 0x66, 0xc4, 0xfb, 0x6b, 0x6f, 0xf1, 0xea, 0x49, 0x26,
    0x68, 0x15, 0xf3, 0xae, 0xa1, 0xac, 0x3c, 0xaa, 0x42, 0x5b, 0x17, 0x8a, 0x42, 0x98, 0x46, 0xed,
    0xdc, 0xad, 0xbd, 0x3d, 0xcc, 0x4c, 0x22, 0x63, 0x34, 0x25, 0x69, 0xc3, 0xc5, 0xcd, 0x12, 0x5d,
    0xef, 0x6d, 0xc5, 0x2e, 0x40, 0x88, 0xc7, 0xcb, 0x2d, 0xda, 0xc4, 0xc8, 0xf3, 0x11, 0xbc, 0x4c,
    0xd9, 0x61, 0xcd, 0x0e, 0xd9, 0x43, 0x0f, 0x22, 0x9f, 0xd3, 0xfd, 0xea, 0x5f, 0x25, 0xa4, 0x3d,
    0x5c, 0xf4, 0x74, 0x54, 0xb0, 0x23, 0x05, 0x88, 0x30, 0x55, 0x30, 0x2d, 0xfd, 0x98, 0xbc, 0x66,
    0x15, 0x06, 0x04, 0x77, 0x6c, 0x26, 0xd7, 0x70, 0x88, 0x9b, 0x0c, 0x5a, 0x7d, 0xda, 0x62, 0xc7,
    0x4a, 0x75, 0xc3, 0x75, 0x95, 0x2d, 0x05, 0x4f, 0xa1, 0x6a, 0xa2, 0x8a, 0x8f, 0x44, 0x29, 0x37,
    0xbc, 0xb0, 0x47, 0x69, 0xdd, 0x10, 0x2d, 0xdc, 0x98, 0xa2, 0x3b, 0xbc, 0xbe, 0x2e, 0xae, 0x72,
    0xf8, 0x4b, 0xbc, 0x98, 0x79, 0x2a, 0xdd, 0x7f, 0x7a, 0xcb, 0x22, 0xe2, 0xb9, 0xfc, 0x67, 0xad,
    0x25, 0x07, 0x41, 0x04, 0xe8, 0x6d, 0xe5, 0xdf, 0x1a, 0x27, 0x76, 0xf0, 0xa6, 0xb1, 0xef, 0x26,
    0xcf, 0x68, 0x2c, 0xf9, 0x4a, 0xef, 0xa6, 0xf1, 0xd9, 0xbf, 0x7d, 0x70, 0xf2, 0xfd, 0xdf, 0x2d,
    0xc4, 0x45, 0xe0, 0x9e, 0xac, 0x80, 0xdd, 0x8b, 0xfe, 0x79, 0xec, 0x89, 0x20, 0x4d, 0x93, 0xbe,
    0x56, 0x52, 0xa0, 0x86, 0xd9, 0x2d, 0xfb, 0xef, 0x80, 0x21, 0x44, 0x1e, 0x97, 0x5a, 0x01, 0x8c,
    0xb5, 0xb9, 0xd7, 0xc0, 0xac, 0xdd, 0xf1, 0x62, 0x59, 0xfb, 0x13, 0x4e, 0xf5, 0xba, 0x87, 0x0e,
    0x3a, 0x22, 0xee, 0xe4, 0x5c, 0xdf, 0x7f, 0xb5, 0x55, 0x5c, 0x4c, 0x8d, 0x63, 0xf4, 0x3d, 0x16,
    0xb6, 0x47, 0x1c, 0xa8, 0x50, 0xf1, 0x85, 0xdc, 0x62, 0x2a, 0x9d, 0xb6, 0x59, 0x89, 0x41, 0xd9,
    0x4b, 0x05, 0x30, 0xeb, 0xeb, 0xdb, 0xd4, 0xf7, 0x61, 0xf6, 0xb0, 0x14, 0xfa, 0x07, 0x89, 0x89,
    0x2c, 0x67, 0xe7, 0xc7, 0xe2, 0x78, 0x7f, 0xe7, 0x75, 0x0d, 0x88, 0x73, 0xdd, 0x9a, 0x36, 0x5a,
    0x7e, 0xbb, 0xbe, 0x25, 0x05, 0xc9, 0x26, 0x5b, 0x52, 0x04, 0x4c, 0xb8, 0x62, 0x1d, 0x5f, 0x1a,
    0x1c, 0xa2, 0xb9, 0x44, 0x14, 0x84, 0x4a, 0xe1, 0x91, 0x47, 0x14, 0xe6, 0x7c, 0xa6, 0xe3, 0x3d,
    0xed, 0x1d, 0x3b, 0x52, 0x0b, 0x24, 0x1e, 0x79, 0x7b, 0xaf, 0x40, 0x38, 0x07, 0x99, 0x3d, 0x6e,
    0xb2, 0x9b, 0x53, 0x77, 0xf6, 0xfa, 0xd3, 0x9f, 0xdb, 0x0c, 0xc2, 0xa6, 0x12, 0xb7, 0xc9, 0x23,
    0x55, 0x90, 0x0b, 0xe5, 0xc1, 0xbc, 0x6e, 0xe0, 0xd1, 0xb7, 0xf2, 0x04, 0x35, 0xaf, 0x23, 0xa2,
    0x3c, 0x02, 0xba, 0xee, 0x03, 0x94, 0x10, 0xe8, 0x9c, 0xa3, 0x5b, 0xfe, 0xdd, 0x2d, 0xea, 0x20,
    0x16, 0x94, 0x55, 0x88, 0xd1, 0xb4, 0x4c, 0x14, 0xee, 0x6d, 0x0c, 0xbe, 0x1f, 0x69, 0x98, 0x44,
    0x2d, 0x9f, 0x3a, 0x6a, 0x93, 0x61, 0xf5, 0xfa, 0xbe, 0x6b, 0xe9, 0x6c, 0x84, 0xb9, 0x4f, 0x3e,
    0x35, 0x3a, 0x86, 0x94, 0x4b, 0x06, 0xee, 0x88, 0x91, 0xb9, 0x7b, 0x44, 0xdc, 0x22, 0x27, 0xd6,
    0x9c, 0x4d, 0x60, 0xe2, 0x69, 0xc2, 0xfd, 0x84, 0xd1, 0x51, 0x3c, 0xa3, 0x8e, 0xe2, 0x02, 0xfa,
    0x5c, 0xa5, 0xce, 0x99, 0x9d, 0x7b, 0x94, 0xa7, 0x1b, 0x14, 0xee, 0x9d, 0x67, 0x0a, 0xda, 0xd0,
    0xc5, 0x7d, 0x22, 0x7e, 0xa5, 0x6c, 0x29, 0x2a, 0x0b, 0x5b, 0xe6, 0x88, 0x69, 0x04, 0x13, 0x46,
    0x56, 0x12, 0xa1, 0x5c, 0x9e, 0x35, 0xfd, 0xd1, 0x91, 0x0c, 0x5d, 0x8d, 0x1e, 0xa8, 0xc5, 0x1f,
    0x06, 0x31, 0x2d, 0x9c, 0xd1, 0x6a, 0x78, 0x04, 0x41, 0x22, 0xc0, 0xb7, 0xe3, 0xcc, 0x16, 0x85,
    0x15, 0x4b, 0x38, 0xd2, 0x87, 0x26, 0xed, 0x56, 0x9f, 0xc3, 0x80, 0x07, 0x42, 0x55, 0x7e, 0x9e,
    0xe0, 0x80, 0x43, 0x4e, 0x57, 0x99, 0x73, 0x9d, 0x71, 0x51, 0xe3, 0x7f, 0x34, 0xbf, 0x23, 0x92,
    0x2f, 0xb3, 0x8d, 0x29, 0xf5, 0x17, 0xad, 0x7c, 0x91, 0x72, 0xd4, 0xb4, 0x7b, 0xbb, 0x9e, 0x23,
    0xfe, 0x96, 0xe0, 0x59, 0x07, 0xab, 0x24, 0x76, 0x3a, 0x29, 0x30, 0xe0, 0x70, 0x33, 0xd5, 0x39,
    0xda, 0xbf, 0xe2, 0xbe, 0x6b, 0xa3, 0x8b, 0x7e, 0xd9, 0xdf, 0x1a, 0x70, 0x53, 0xdd, 0xc2, 0x74,
    0x28, 0x33, 0x67, 0x36, 0x13, 0x26, 0x99, 0x84, 0xdf, 0x7d, 0xc9, 0x14, 0x17, 0x51, 0x4d, 0x3b,
    0xf6, 0xf7, 0xbc, 0xa7, 0xcc, 0x3b, 0xd5, 0x09, 0x8e, 0x6d, 0x58, 0xcd, 0x38, 0x90, 0x0e, 0xcc,
    0x4e, 0xa7, 0x7d, 0x14, 0x94, 0x63, 0x66, 0xad, 0x4b, 0xb6, 0x95, 0x82, 0x08, 0x1a, 0xac, 0xcd,
    0x83, 0xfb, 0xe1, 0x2b, 0x65, 0xa2, 0x63, 0x40, 0xea, 0x0b, 0x56, 0x8e, 0xfd, 0xfb, 0xa5, 0xda,
    0x03, 0x5e, 0x8d, 0x54, 0x06, 0x12, 0x22, 0x4f, 0x86, 0x52, 0x41, 0x4c, 0x07, 0xe0, 0x9d, 0x19,
    0xa4, 0xfa, 0x5f, 0xc3, 0xdf, 0x70, 0x8a, 0xb8, 0x4a, 0x40, 0xa2, 0xac, 0x58, 0x1e, 0x32, 0x43,
    0xfc, 0x50, 0x44, 0x0b, 0xc6, 0x31, 0x65, 0x39, 0xc3, 0x5f, 0x3a, 0x42, 0x3d, 0x49, 0x49, 0xba,
    0x25, 0x3b, 0x84, 0x23, 0xce, 0x10, 0xaa, 0xfc, 0x31, 0xa6, 0x0d, 0x54, 0xe3, 0xc5, 0xe1, 0x1a,
    0x96, 0x0d, 0x94, 0x82, 0x9a, 0x99, 0x50, 0xaf, 0xd4, 0x03, 0xb3, 0x6b, 0x35, 0xd1, 0xe1, 0x44,
];

//! Built-in CDR1 Pantone swatch table.
//!
//! CorelDRAW 1 documents reference Pantone colors by index into a fixed
//! swatch book instead of storing a device color. Each entry is the pure,
//! fully saturated swatch in sRGB.

/// Number of swatches in the table.
pub const PANTONE_SWATCH_COUNT: usize = 797;

/// Pure `[r, g, b]` swatch colors, indexed by Pantone index.
#[rustfmt::skip]
pub static PANTONE_SWATCHES: [[u8; 3]; PANTONE_SWATCH_COUNT] = [
    [0x00, 0x00, 0x00], [0xff, 0xee, 0x00], [0xde, 0x4f, 0x16], [0xa1, 0x00, 0x6a],
    [0xc5, 0x00, 0x8e], [0x7d, 0x00, 0x89], [0x0c, 0x00, 0x87], [0x00, 0x75, 0xad],
    [0x00, 0xa3, 0x6e], [0x08, 0x0d, 0x02], [0x30, 0x00, 0x7b], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0xe5, 0xde, 0xc5], [0xdc, 0xd9, 0xc7], [0xba, 0xad, 0xa4], [0xa6, 0x96, 0x8d],
    [0x82, 0x78, 0x72], [0xaf, 0x9b, 0x8f], [0xa9, 0x98, 0x8d], [0x85, 0x7a, 0x74],
    [0x78, 0x6e, 0x6b], [0x60, 0x58, 0x57], [0x44, 0x3c, 0x3e], [0xcf, 0xc9, 0xb5],
    [0xca, 0xc6, 0xba], [0xbe, 0xb5, 0xb2], [0xb0, 0xa6, 0xa6], [0x91, 0x8e, 0x92],
    [0xaa, 0x9b, 0x98], [0x91, 0x8d, 0x90], [0x75, 0x74, 0x7e], [0x5b, 0x5a, 0x68],
    [0x4d, 0x4d, 0x5c], [0x32, 0x35, 0x43], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0xff, 0xff, 0xff],
    [0xff, 0xf6, 0x81], [0xff, 0xfb, 0x6b], [0xff, 0xf4, 0x00], [0xc5, 0xb0, 0x0a],
    [0xa4, 0x93, 0x00], [0x6a, 0x60, 0x00], [0xff, 0xf3, 0x7a], [0xff, 0xf4, 0x6b],
    [0xff, 0xef, 0x5e], [0xff, 0xed, 0x2f], [0xd9, 0xbd, 0x11], [0xa2, 0x8b, 0x00],
    [0x8e, 0x7e, 0x00], [0xff, 0xee, 0x7a], [0xff, 0xef, 0x6a], [0xff, 0xea, 0x57],
    [0xff, 0xd9, 0x00], [0xc2, 0xa1, 0x00], [0xa1, 0x85, 0x0d], [0x73, 0x69, 0x0f],
    [0xff, 0xed, 0x7a], [0xff, 0xee, 0x76], [0xff, 0xe2, 0x1c], [0xff, 0xd2, 0x00],
    [0xc3, 0x98, 0x00], [0x9a, 0x7f, 0x00], [0x84, 0x72, 0x00], [0xff, 0xe9, 0x7a],
    [0xff, 0xea, 0x78], [0xff, 0xe0, 0x1a], [0xff, 0xc7, 0x00], [0xc8, 0x99, 0x00],
    [0x84, 0x6d, 0x00], [0x52, 0x4d, 0x05], [0xff, 0xe0, 0x72], [0xff, 0xd6, 0x5f],
    [0xff, 0xc5, 0x1a], [0xff, 0xac, 0x00], [0xce, 0x8b, 0x00], [0x93, 0x6c, 0x00],
    [0x5a, 0x4e, 0x09], [0xff, 0xd5, 0x61], [0xff, 0xce, 0x4c], [0xf2, 0xb5, 0x2b],
    [0xcb, 0x83, 0x00], [0xc5, 0x7e, 0x00], [0x90, 0x6f, 0x00], [0x5b, 0x51, 0x01],
    [0xff, 0xd7, 0x88], [0xff, 0xca, 0x74], [0xff, 0xa7, 0x19], [0xff, 0x98, 0x00],
    [0xcb, 0x7d, 0x00], [0x95, 0x65, 0x00], [0x7f, 0x58, 0x00], [0xff, 0xe4, 0xa3],
    [0xff, 0xd4, 0x83], [0xf5, 0x9a, 0x4c], [0xed, 0x7f, 0x2e], [0xb2, 0x58, 0x2a],
    [0x7a, 0x47, 0x02], [0x4d, 0x35, 0x06], [0xff, 0xcb, 0x8b], [0xff, 0xb0, 0x73],
    [0xff, 0x93, 0x51], [0xe6, 0x75, 0x00], [0xc2, 0x62, 0x00], [0x9b, 0x54, 0x05],
    [0x43, 0x29, 0x0d], [0xff, 0xc1, 0x98], [0xff, 0x9e, 0x7c], [0xff, 0x85, 0x5d],
    [0xff, 0x6d, 0x0d], [0xb8, 0x58, 0x02], [0x72, 0x3d, 0x07], [0x48, 0x29, 0x04],
    [0xff, 0xbd, 0xab], [0xff, 0x8e, 0x83], [0xff, 0x70, 0x61], [0xc6, 0x42, 0x30],
    [0x8e, 0x38, 0x25], [0x58, 0x2a, 0x23], [0xff, 0xc5, 0xba], [0xff, 0x8e, 0x9e],
    [0xec, 0x76, 0x8e], [0xcc, 0x30, 0x4f], [0xa3, 0x22, 0x3a], [0x74, 0x10, 0x19],
    [0x49, 0x10, 0x10], [0xff, 0xb2, 0xb1], [0xff, 0x98, 0xa9], [0xdf, 0x59, 0x78],
    [0xd6, 0x26, 0x54], [0x9a, 0x24, 0x47], [0x61, 0x13, 0x33], [0x44, 0x18, 0x2e],
    [0xff, 0xc3, 0xbd], [0xeb, 0xaa, 0xb1], [0xca, 0x35, 0x6a], [0xaa, 0x17, 0x43],
    [0x8d, 0x00, 0x34], [0x71, 0x18, 0x39], [0x59, 0x1d, 0x1f], [0xff, 0xc0, 0xc3],
    [0xe9, 0x7d, 0xa2], [0xd5, 0x56, 0x86], [0xaf, 0x07, 0x55], [0x7c, 0x15, 0x49],
    [0x53, 0x0b, 0x34], [0x43, 0x10, 0x30], [0xff, 0xa8, 0xb9], [0xe7, 0x6d, 0x9c],
    [0xdb, 0x33, 0x81], [0xb8, 0x10, 0x63], [0xa1, 0x18, 0x5b], [0x67, 0x15, 0x44],
    [0x44, 0x09, 0x30], [0xff, 0xce, 0xdf], [0xda, 0x74, 0xb1], [0xbc, 0x1a, 0x88],
    [0x7c, 0x00, 0x56], [0x65, 0x00, 0x49], [0x40, 0x00, 0x31], [0xff, 0x7a, 0xc5],
    [0xe8, 0x5d, 0xac], [0xd3, 0x31, 0x98], [0xb8, 0x00, 0x81], [0x7d, 0x00, 0x5e],
    [0x57, 0x00, 0x46], [0x3c, 0x10, 0x36], [0xff, 0xba, 0xd4], [0xe4, 0x6c, 0xb2],
    [0xd0, 0x34, 0x9e], [0xa6, 0x00, 0x7b], [0x6c, 0x00, 0x59], [0x4a, 0x00, 0x40],
    [0xff, 0xa1, 0xd8], [0xef, 0x60, 0xc6], [0xc6, 0x3c, 0xa5], [0xab, 0x00, 0x89],
    [0x80, 0x00, 0x71], [0x68, 0x00, 0x5d], [0x3f, 0x00, 0x3c], [0xff, 0xd0, 0xed],
    [0xde, 0x95, 0xc5], [0xd0, 0x67, 0xc2], [0x8d, 0x00, 0x8a], [0x7c, 0x00, 0x7c],
    [0x66, 0x00, 0x6e], [0x44, 0x00, 0x4d], [0xf9, 0xd5, 0xee], [0xe4, 0x93, 0xff],
    [0xab, 0x35, 0xbe], [0x63, 0x00, 0x74], [0x4e, 0x00, 0x58], [0x37, 0x00, 0x47],
    [0xe6, 0xb9, 0xd3], [0xd2, 0x9b, 0xc6], [0x91, 0x45, 0xa5], [0x64, 0x0a, 0x7f],
    [0x45, 0x0f, 0x56], [0x3b, 0x17, 0x4e], [0x35, 0x1d, 0x4a], [0xda, 0xc4, 0xde],
    [0xb1, 0x8a, 0xd0], [0x6f, 0x2b, 0xb1], [0x48, 0x12, 0x8a], [0x36, 0x05, 0x70],
    [0x2f, 0x0a, 0x5e], [0x21, 0x05, 0x4d], [0xc2, 0xa6, 0xcc], [0xab, 0x89, 0xc4],
    [0x8c, 0x6f, 0xba], [0x3e, 0x1d, 0x88], [0x25, 0x07, 0x65], [0x22, 0x0c, 0x57],
    [0x1c, 0x0d, 0x45], [0xc2, 0xc9, 0xdc], [0xa8, 0xab, 0xdd], [0x7c, 0x89, 0xc4],
    [0x06, 0x10, 0x6a], [0x00, 0x0e, 0x4f], [0x0a, 0x0c, 0x44], [0xc9, 0xd5, 0xf0],
    [0xa7, 0xb8, 0xdf], [0x5f, 0x74, 0xe2], [0x25, 0x3f, 0xb6], [0x00, 0x17, 0x69],
    [0x00, 0x00, 0x67], [0x00, 0x0e, 0x44], [0xc4, 0xd5, 0xe5], [0x94, 0xb0, 0xdc],
    [0x75, 0x92, 0xc7], [0x00, 0x00, 0xb4], [0x00, 0x2a, 0x7f], [0x00, 0x28, 0x6c],
    [0x00, 0x1c, 0x48], [0x8b, 0xb0, 0xc9], [0x6c, 0x97, 0xb8], [0x40, 0x7f, 0xb3],
    [0x0f, 0x59, 0xa0], [0x00, 0x40, 0x85], [0x00, 0x2f, 0x5d], [0x00, 0x29, 0x4d],
    [0xcc, 0xea, 0xe4], [0x7f, 0xcd, 0xe1], [0x56, 0xa9, 0xc7], [0x00, 0x67, 0x95],
    [0x00, 0x42, 0x61], [0x00, 0x2f, 0x4e], [0x9e, 0xd7, 0xd2], [0x72, 0xb7, 0xc1],
    [0x2e, 0x8a, 0xa1], [0x00, 0x72, 0x91], [0x00, 0x62, 0x81], [0x00, 0x44, 0x5f],
    [0x00, 0x29, 0x3c], [0xdb, 0xff, 0xe4], [0xc7, 0xf5, 0xdf], [0x72, 0xd6, 0xc1],
    [0x00, 0x96, 0x96], [0x00, 0x78, 0x7d], [0x00, 0x6b, 0x71], [0x00, 0x4b, 0x55],
    [0xb7, 0xdf, 0xc2], [0x89, 0xd0, 0xb0], [0x6b, 0xb9, 0xa1], [0x17, 0x84, 0x79],
    [0x10, 0x5f, 0x5e], [0x00, 0x4f, 0x50], [0x16, 0x37, 0x3f], [0xcc, 0xf5, 0xc2],
    [0xc0, 0xf0, 0xbe], [0x74, 0xe2, 0xa3], [0x17, 0x85, 0x5c], [0x15, 0x6e, 0x54],
    [0x12, 0x58, 0x4b], [0xa1, 0xe8, 0xb1], [0x82, 0xce, 0x9d], [0x59, 0xaa, 0x80],
    [0x2a, 0x91, 0x67], [0x1b, 0x6d, 0x52], [0x24, 0x5c, 0x4a], [0x11, 0x41, 0x3d],
    [0xc8, 0xee, 0xa5], [0xbc, 0xf4, 0xa2], [0x8d, 0xee, 0x88], [0x3b, 0xb2, 0x53],
    [0x30, 0x95, 0x40], [0x2a, 0x6f, 0x36], [0x2d, 0x4a, 0x1f], [0xc8, 0xf6, 0xa6],
    [0xbc, 0xff, 0xa0], [0x92, 0xf5, 0x8f], [0x2b, 0xcb, 0x4c], [0x31, 0x8b, 0x40],
    [0x2a, 0x67, 0x39], [0x27, 0x47, 0x30], [0xd6, 0xf0, 0x94], [0xb7, 0xe3, 0x6f],
    [0x8f, 0xd4, 0x4e], [0x5e, 0xa2, 0x23], [0x4a, 0x7d, 0x22], [0x46, 0x6c, 0x18],
    [0x3f, 0x5c, 0x12], [0xe5, 0xf4, 0x91], [0xda, 0xf1, 0x73], [0xc0, 0xe7, 0x52],
    [0x89, 0xca, 0x03], [0x76, 0xa6, 0x00], [0x62, 0x80, 0x00], [0x45, 0x52, 0x0a],
    [0xf6, 0xff, 0x74], [0xe8, 0xff, 0x6c], [0xcc, 0xe7, 0x3d], [0xb0, 0xde, 0x00],
    [0x98, 0xbd, 0x00], [0x7f, 0x93, 0x00], [0x51, 0x57, 0x00], [0xf7, 0xf6, 0x66],
    [0xe6, 0xf1, 0x57], [0xd1, 0xe0, 0x22], [0xc4, 0xd6, 0x00], [0xac, 0xae, 0x00],
    [0x98, 0x96, 0x00], [0x6e, 0x6b, 0x00], [0xf9, 0xfa, 0x7e], [0xf4, 0xfa, 0x62],
    [0xed, 0xfa, 0x37], [0xec, 0xff, 0x0d], [0xbb, 0xbf, 0x00], [0x9f, 0x99, 0x00],
    [0x74, 0x73, 0x00], [0xfd, 0xf3, 0x78], [0xf6, 0xf9, 0x4f], [0xf1, 0xf2, 0x20],
    [0xe9, 0xf2, 0x00], [0xbf, 0xba, 0x00], [0xa1, 0x9b, 0x00], [0x8e, 0x86, 0x03],
    [0xd3, 0xc9, 0xaf], [0xb2, 0xa3, 0x90], [0x96, 0x8d, 0x80], [0x82, 0x7a, 0x6d],
    [0x5e, 0x58, 0x54], [0x33, 0x31, 0x2e], [0xd6, 0xca, 0xb5], [0xb5, 0xa6, 0x9a],
    [0xaa, 0x9c, 0x97], [0x7c, 0x73, 0x71], [0x54, 0x4a, 0x48], [0x43, 0x3e, 0x44],
    [0x11, 0x0f, 0x0a], [0xc8, 0xc0, 0xa6], [0xac, 0xa3, 0x96], [0x89, 0x86, 0x7d],
    [0x65, 0x67, 0x64], [0x4b, 0x4d, 0x4b], [0x39, 0x3b, 0x3b], [0x13, 0x13, 0x17],
    [0xc8, 0xc3, 0xbb], [0xbc, 0xb7, 0xb8], [0x8d, 0x8b, 0x92], [0x7f, 0x7d, 0x82],
    [0x5d, 0x5b, 0x60], [0x3a, 0x3a, 0x48], [0x07, 0x0b, 0x1c], [0xcc, 0xc7, 0xbb],
    [0xb2, 0xac, 0xb0], [0x8f, 0x8f, 0x99], [0x78, 0x78, 0x82], [0x51, 0x55, 0x67],
    [0x28, 0x2e, 0x48], [0x0f, 0x10, 0x20], [0xcc, 0xb0, 0xa6], [0xc3, 0xa4, 0x9d],
    [0x9a, 0x7b, 0x7f], [0x78, 0x60, 0x6a], [0x3f, 0x2d, 0x3d], [0x26, 0x1a, 0x25],
    [0x21, 0x1b, 0x22], [0xd4, 0xd2, 0xc6], [0xbd, 0xbb, 0xb8], [0x8b, 0x8e, 0x91],
    [0x69, 0x6a, 0x6d], [0x47, 0x48, 0x50], [0x2e, 0x2e, 0x3b], [0x22, 0x24, 0x22],
    [0x3a, 0x31, 0x16], [0x4f, 0x46, 0x3a], [0x59, 0x4e, 0x2d], [0xa0, 0x8f, 0x72],
    [0xad, 0x9d, 0x86], [0xc8, 0xba, 0x95], [0xdd, 0xd8, 0xad], [0x54, 0x4b, 0x25],
    [0x7f, 0x70, 0x19], [0xa8, 0x8f, 0x2f], [0xe2, 0xd3, 0x60], [0xea, 0xe1, 0x71],
    [0xf7, 0xef, 0x83], [0xf7, 0xee, 0x98], [0x59, 0x45, 0x35], [0x6d, 0x4f, 0x2b],
    [0x83, 0x5a, 0x35], [0xc2, 0xa0, 0x75], [0xd6, 0xba, 0x8a], [0xdb, 0xc5, 0x8e],
    [0xea, 0xd9, 0xa3], [0x4d, 0x35, 0x22], [0x9f, 0x61, 0x2e], [0xc2, 0x6d, 0x21],
    [0xe9, 0xa8, 0x72], [0xe6, 0xb4, 0x80], [0xf0, 0xcf, 0x99], [0xf3, 0xd5, 0x9e],
    [0x3b, 0x29, 0x2d], [0x5a, 0x3d, 0x3b], [0x68, 0x3e, 0x3b], [0xa5, 0x7f, 0x6f],
    [0xb1, 0x92, 0x86], [0xcc, 0xab, 0x97], [0xd6, 0xc4, 0xaf], [0x4f, 0x30, 0x20],
    [0x91, 0x41, 0x20], [0xc8, 0x3f, 0x31], [0xdb, 0x92, 0x79], [0xef, 0xab, 0x8d],
    [0xeb, 0xb2, 0x98], [0xf5, 0xcf, 0xb0], [0x4e, 0x2b, 0x33], [0x60, 0x27, 0x32],
    [0x70, 0x22, 0x37], [0xc5, 0x70, 0x7d], [0xe8, 0x9b, 0x9e], [0xef, 0xb5, 0xb1],
    [0xf4, 0xca, 0xb6], [0x3f, 0x29, 0x1b], [0x59, 0x33, 0x31], [0x72, 0x3c, 0x38],
    [0xc7, 0x80, 0x7e], [0xd5, 0x98, 0x90], [0xe4, 0xb1, 0xa5], [0xf0, 0xcd, 0xb9],
    [0x42, 0x1f, 0x31], [0x53, 0x21, 0x38], [0x60, 0x29, 0x44], [0xbc, 0x6c, 0x83],
    [0xd2, 0x83, 0x90], [0xe9, 0xa6, 0xa9], [0xec, 0xb8, 0xb8], [0x48, 0x26, 0x4a],
    [0x68, 0x2f, 0x6f], [0x80, 0x2e, 0x83], [0xc2, 0x6a, 0xa9], [0xd3, 0x8b, 0xb4],
    [0xeb, 0xa5, 0xc2], [0xf7, 0xc7, 0xcf], [0x3b, 0x1d, 0x3e], [0x55, 0x29, 0x61],
    [0x62, 0x29, 0x6f], [0xa6, 0x72, 0x9a], [0xbc, 0x8d, 0xa6], [0xd5, 0xaa, 0xb9],
    [0xe7, 0xc7, 0xce], [0x3c, 0x20, 0x56], [0x4e, 0x20, 0x77], [0x5b, 0x1c, 0x8b],
    [0x94, 0x62, 0xa8], [0xba, 0x86, 0xc1], [0xd2, 0xa2, 0xcd], [0xe2, 0xc5, 0xe1],
    [0x21, 0x1e, 0x3c], [0x2d, 0x23, 0x4e], [0x3e, 0x37, 0x6b], [0x8b, 0x80, 0x99],
    [0xad, 0x9e, 0xb5], [0xb9, 0xaf, 0xc2], [0xcc, 0xc8, 0xd0], [0x18, 0x23, 0x4c],
    [0x0f, 0x2d, 0x67], [0x0f, 0x33, 0x7c], [0x65, 0x7b, 0xab], [0x8c, 0x9b, 0xbc],
    [0xa9, 0xb1, 0xc6], [0xc3, 0xcd, 0xdc], [0x00, 0x1b, 0x39], [0x09, 0x31, 0x51],
    [0x1f, 0x47, 0x69], [0x59, 0x7a, 0x96], [0x81, 0x9c, 0xac], [0x9f, 0xab, 0xb3],
    [0xc3, 0xcf, 0xcd], [0x19, 0x2b, 0x00], [0x18, 0x3e, 0x00], [0x21, 0x4e, 0x27],
    [0x69, 0x86, 0x6d], [0x95, 0xa6, 0x90], [0xa5, 0xb1, 0x9a], [0xb7, 0xc5, 0xaa],
    [0x1d, 0x30, 0x27], [0x27, 0x50, 0x46], [0x39, 0x6c, 0x5d], [0x74, 0xa1, 0x85],
    [0x92, 0xb4, 0x99], [0xc4, 0xdd, 0xbe], [0xe1, 0xf6, 0xd7], [0x1b, 0x38, 0x2d],
    [0x16, 0x4f, 0x3b], [0x2b, 0x6c, 0x55], [0x67, 0xa6, 0x84], [0x93, 0xc7, 0x9e],
    [0xb6, 0xd9, 0xb2], [0xd1, 0xe8, 0xc1], [0x39, 0x41, 0x00], [0x4e, 0x62, 0x00],
    [0x56, 0x77, 0x00], [0xa6, 0xbe, 0x64], [0xc8, 0xd8, 0x85], [0xd5, 0xde, 0x87],
    [0xdd, 0xe4, 0x9a], [0x5a, 0x56, 0x00], [0x90, 0x91, 0x00], [0xa5, 0xae, 0x00],
    [0xd0, 0xda, 0x5b], [0xdd, 0xe3, 0x65], [0xe7, 0xec, 0x73], [0xe9, 0xef, 0x8d],
    [0xff, 0xd1, 0x70], [0xff, 0xcd, 0x64], [0xff, 0xb6, 0x15], [0xff, 0x9c, 0x00],
    [0xce, 0x85, 0x00], [0x7c, 0x5a, 0x00], [0x46, 0x34, 0x00], [0xff, 0xcc, 0x8f],
    [0xff, 0xa9, 0x63], [0xf5, 0x85, 0x32], [0xf7, 0x78, 0x00], [0xc2, 0x63, 0x00],
    [0x86, 0x4e, 0x00], [0x57, 0x31, 0x00], [0xff, 0xb6, 0x8c], [0xff, 0xa5, 0x7b],
    [0xff, 0x83, 0x4f], [0xe6, 0x60, 0x00], [0xc2, 0x56, 0x00], [0x7d, 0x3b, 0x00],
    [0x4d, 0x27, 0x00], [0xff, 0xa7, 0xa5], [0xff, 0x88, 0x8f], [0xff, 0x63, 0x75],
    [0xde, 0x2c, 0x1a], [0xc6, 0x2d, 0x37], [0x78, 0x19, 0x15], [0x4f, 0x18, 0x18],
    [0xca, 0x61, 0xff], [0xbc, 0x39, 0xff], [0x80, 0x0e, 0xbe], [0x59, 0x00, 0x89],
    [0x4c, 0x00, 0x74], [0x38, 0x00, 0x58], [0x2f, 0x00, 0x4e], [0xbf, 0x6b, 0xff],
    [0xae, 0x3d, 0xff], [0x8a, 0x20, 0xdb], [0x47, 0x00, 0x80], [0x3d, 0x00, 0x70],
    [0x35, 0x00, 0x63], [0x28, 0x00, 0x52], [0xcf, 0x99, 0xff], [0xa8, 0x4e, 0xff],
    [0x6c, 0x0f, 0xc0], [0x51, 0x00, 0xa0], [0x20, 0x00, 0x5f], [0x1e, 0x12, 0x4c],
    [0x9c, 0x79, 0xcc], [0x8e, 0x74, 0xcc], [0x6c, 0x22, 0xcf], [0x33, 0x00, 0x8e],
    [0x26, 0x00, 0x6f], [0x1d, 0x00, 0x57], [0x17, 0x00, 0x45], [0xbc, 0xd5, 0xda],
    [0x7c, 0xac, 0xd1], [0x56, 0x9a, 0xc9], [0x21, 0x76, 0xc1], [0x13, 0x52, 0x8a],
    [0x00, 0x39, 0x5d], [0x00, 0x25, 0x40], [0x9e, 0xd7, 0xca], [0x72, 0xb4, 0xb6],
    [0x00, 0x92, 0xa1], [0x0d, 0x76, 0x8b], [0x00, 0x68, 0x7c], [0x00, 0x47, 0x5b],
    [0x00, 0x35, 0x48], [0xae, 0xe9, 0xc3], [0x7e, 0xe3, 0xb7], [0x50, 0xc3, 0x9e],
    [0x00, 0x94, 0x7c], [0x00, 0x78, 0x6c], [0x00, 0x51, 0x4f], [0x00, 0x32, 0x38],
    [0xac, 0xdf, 0xb7], [0x7c, 0xd0, 0xa6], [0x5e, 0xb9, 0x96], [0x00, 0x91, 0x76],
    [0x0a, 0x71, 0x60], [0x0c, 0x5b, 0x51], [0x0d, 0x37, 0x32], [0x86, 0xd6, 0xb0],
    [0x70, 0xcd, 0xa6], [0x29, 0xa8, 0x89], [0x00, 0x8a, 0x6e], [0x00, 0x6e, 0x5c],
    [0x00, 0x57, 0x49], [0x00, 0x2e, 0x26], [0xa4, 0xe9, 0xa7], [0x7c, 0xe5, 0x95],
    [0x5c, 0xd4, 0x81], [0x34, 0xa5, 0x62], [0x30, 0x80, 0x57], [0x24, 0x5c, 0x44],
    [0x11, 0x38, 0x23], [0xff, 0xff, 0x78], [0xfb, 0xfe, 0x4f], [0xf8, 0xfa, 0x20],
    [0xe9, 0xec, 0x00], [0xab, 0xa2, 0x00], [0x85, 0x81, 0x00], [0x59, 0x56, 0x00],
    [0x4f, 0x42, 0x0c], [0x77, 0x69, 0x00], [0x8a, 0x7c, 0x3e], [0xbb, 0xab, 0x7e],
    [0xbf, 0xb0, 0x84], [0xca, 0xc4, 0x9b], [0xd6, 0xd1, 0xa9], [0x45, 0x2a, 0x00],
    [0x7e, 0x59, 0x43], [0xa1, 0x7a, 0x62], [0xbe, 0x96, 0x75], [0xc9, 0xa9, 0x8c],
    [0xc9, 0xac, 0x91], [0xd3, 0xba, 0x9c], [0x4d, 0x2b, 0x32], [0x6a, 0x3e, 0x3e],
    [0x92, 0x6e, 0x66], [0xae, 0x84, 0x74], [0xbc, 0x95, 0x80], [0xc8, 0xac, 0x99],
    [0xd1, 0xb7, 0x9e], [0x43, 0x2d, 0x3a], [0x71, 0x43, 0x55], [0x92, 0x60, 0x6d],
    [0xc6, 0x94, 0x9a], [0xd5, 0xa4, 0xa7], [0xdb, 0xc2, 0xb9], [0xdd, 0xcc, 0xc3],
    [0x3f, 0x18, 0x4a], [0x63, 0x2e, 0x6f], [0x8c, 0x56, 0x91], [0xba, 0x89, 0xad],
    [0xc0, 0x9a, 0xb3], [0xce, 0xb1, 0xc2], [0xd9, 0xc8, 0xcd], [0x2d, 0x1b, 0x3e],
    [0x44, 0x29, 0x52], [0x69, 0x48, 0x70], [0x90, 0x72, 0x8b], [0xac, 0x8d, 0x9f],
    [0xc2, 0xaa, 0xb3], [0xd7, 0xc7, 0xc6], [0x1e, 0x00, 0x4b], [0x3a, 0x20, 0x77],
    [0x42, 0x1c, 0x8b], [0x73, 0x5c, 0xac], [0x9b, 0x84, 0xc1], [0xb7, 0xa4, 0xcd],
    [0xcc, 0xc3, 0xe1], [0x06, 0x1c, 0x50], [0x1b, 0x33, 0x65], [0x4d, 0x5f, 0x85],
    [0x75, 0x80, 0x9c], [0x9a, 0x9e, 0xb8], [0xb0, 0xaf, 0xc5], [0xc3, 0xc8, 0xd4],
    [0x00, 0x25, 0x3e], [0x1a, 0x47, 0x5b], [0x51, 0x74, 0x83], [0x89, 0x9f, 0xa3],
    [0xa2, 0xb4, 0xb4], [0xbc, 0xca, 0xc2], [0xd1, 0xdc, 0xd0], [0x00, 0x1b, 0x31],
    [0x18, 0x39, 0x4c], [0x37, 0x53, 0x63], [0x77, 0x87, 0x8c], [0x94, 0xa0, 0xa0],
    [0xad, 0xb4, 0xb0], [0xc8, 0xd0, 0xc7], [0x28, 0x38, 0x40], [0x4c, 0x64, 0x5c],
    [0x6a, 0x83, 0x77], [0x7b, 0x8f, 0x82], [0xa1, 0xad, 0x9f], [0xaf, 0xb9, 0xa8],
    [0xc1, 0xcc, 0xb7], [0x17, 0x27, 0x21], [0x3a, 0x50, 0x4d], [0x57, 0x69, 0x63],
    [0x90, 0x9d, 0x91], [0xac, 0xb1, 0xa2], [0xc0, 0xcc, 0xb5], [0xd6, 0xde, 0xc8],
    [0x34, 0x3d, 0x29], [0x4a, 0x57, 0x35], [0x5d, 0x6c, 0x3d], [0x9e, 0xa1, 0x75],
    [0xb1, 0xb0, 0x7e], [0xc9, 0xcb, 0xa2], [0xd8, 0xd9, 0xae], [0x3f, 0x45, 0x11],
    [0x5d, 0x66, 0x00], [0x7e, 0x87, 0x46], [0xb1, 0xb2, 0x73], [0xc8, 0xcc, 0x91],
    [0xd5, 0xd9, 0xa2], [0xdd, 0xde, 0xad], [0x49, 0x4a, 0x2a], [0x71, 0x74, 0x3d],
    [0xa5, 0xa0, 0x69], [0xc4, 0xc0, 0x7d], [0xca, 0xc7, 0x85], [0xd3, 0xd0, 0x8f],
    [0xda, 0xd7, 0xa3],
];

/// Looks up the pure swatch color for `index`.
///
/// Indices past the end of the table yield black.
#[inline]
pub fn pantone_swatch(index: u16) -> [u8; 3] {
    PANTONE_SWATCHES
        .get(usize::from(index))
        .copied()
        .unwrap_or([0, 0, 0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_swatches() {
        assert_eq!(pantone_swatch(0), [0x00, 0x00, 0x00]);
        assert_eq!(pantone_swatch(1), [0xff, 0xee, 0x00]);
        assert_eq!(pantone_swatch(2), [0xde, 0x4f, 0x16]);
        assert_eq!(pantone_swatch(796), [0xda, 0xd7, 0xa3]);
    }

    #[test]
    fn test_out_of_range_is_black() {
        assert_eq!(pantone_swatch(797), [0, 0, 0]);
        assert_eq!(pantone_swatch(u16::MAX), [0, 0, 0]);
    }
}

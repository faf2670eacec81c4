//! Compiled-in stroke font tables.
//!
//! Each table holds 94 entries indexed by `codepoint - 33`, covering the
//! printable ASCII range `!`..=`~`. Entries use the stroke-path encoding
//! decoded by [`crate::path`]. Glyphs are rescaled by their own bounding box
//! before drawing, so tables only need internally consistent proportions,
//! not a shared baseline.

/// Angular single-stroke font on an 8x16 design grid.
pub(crate) static SKELETAL: [&str; 94] = [
    "M4,0 L4,10 M4,14 L4,16",                                          // !
    "M2,0 L2,4 M6,0 L6,4",                                             // "
    "M2,0 L2,16 M6,0 L6,16 M0,5 L8,5 M0,11 L8,11",                     // #
    "M6,2 L2,2 L2,8 L6,8 L6,14 L2,14 M4,0 L4,16",                      // $
    "M0,16 L8,0 M1,1 L3,1 L3,3 L1,3 L1,1 M5,13 L7,13 L7,15 L5,15 L5,13", // %
    "M8,16 L2,8 L2,2 L5,2 L5,7 L0,12 L0,14 L2,16 L5,13",               // &
    "M4,0 L4,4",                                                       // '
    "M6,0 L3,4 L3,12 L6,16",                                           // (
    "M2,0 L5,4 L5,12 L2,16",                                           // )
    "M4,2 L4,10 M0,4 L8,8 M8,4 L0,8",                                  // *
    "M4,4 L4,12 M0,8 L8,8",                                            // +
    "M5,13 L3,17",                                                     // ,
    "M0,8 L8,8",                                                       // -
    "M4,14 L4,16",                                                     // .
    "M0,16 L8,0",                                                      // /
    "M2,0 L6,0 L8,4 L8,12 L6,16 L2,16 L0,12 L0,4 L2,0 M0,12 L8,4",     // 0
    "M2,3 L4,0 L4,16 M2,16 L6,16",                                     // 1
    "M0,3 L2,0 L6,0 L8,3 L8,6 L0,13 L0,16 L8,16",                      // 2
    "M0,0 L8,0 L4,6 L8,10 L8,13 L6,16 L2,16 L0,13",                    // 3
    "M6,16 L6,0 L0,10 L8,10",                                          // 4
    "M8,0 L0,0 L0,7 L6,7 L8,9 L8,13 L6,16 L2,16 L0,14",                // 5
    "M7,0 L3,0 L0,4 L0,13 L2,16 L6,16 L8,13 L8,10 L6,8 L0,8",          // 6
    "M0,0 L8,0 L3,16",                                                 // 7
    "M2,0 L6,0 L8,2 L8,6 L6,8 L2,8 L0,6 L0,2 L2,0 M2,8 L0,10 L0,14 L2,16 L6,16 L8,14 L8,10 L6,8", // 8
    "M8,8 L2,8 L0,6 L0,3 L2,0 L6,0 L8,3 L8,12 L5,16 L1,16",            // 9
    "M4,4 L4,6 M4,12 L4,14",                                           // :
    "M4,4 L4,6 M5,12 L3,16",                                           // ;
    "M7,0 L1,8 L7,16",                                                 // <
    "M0,6 L8,6 M0,10 L8,10",                                           // =
    "M1,0 L7,8 L1,16",                                                 // >
    "M0,3 L2,0 L6,0 L8,3 L8,5 L4,9 L4,11 M4,14 L4,16",                 // ?
    "M6,11 L3,11 L2,10 L2,5 L3,4 L6,4 L6,11 L8,11 L8,3 L6,0 L2,0 L0,3 L0,13 L2,16 L7,16", // @
    "M0,16 L4,0 L8,16 M2,10 L6,10",                                    // A
    "M0,0 L0,16 M0,0 L6,0 L8,2 L8,6 L6,8 L0,8 M6,8 L8,10 L8,14 L6,16 L0,16", // B
    "M8,3 L6,0 L2,0 L0,3 L0,13 L2,16 L6,16 L8,13",                     // C
    "M0,0 L0,16 M0,0 L5,0 L8,4 L8,12 L5,16 L0,16",                     // D
    "M8,0 L0,0 L0,16 L8,16 M0,8 L5,8",                                 // E
    "M8,0 L0,0 L0,16 M0,8 L5,8",                                       // F
    "M8,3 L6,0 L2,0 L0,3 L0,13 L2,16 L6,16 L8,13 L8,9 L4,9",           // G
    "M0,0 L0,16 M8,0 L8,16 M0,8 L8,8",                                 // H
    "M2,0 L6,0 M4,0 L4,16 M2,16 L6,16",                                // I
    "M8,0 L8,13 L6,16 L2,16 L0,13 L0,11",                              // J
    "M0,0 L0,16 M8,0 L0,9 M3,6 L8,16",                                 // K
    "M0,0 L0,16 L8,16",                                                // L
    "M0,16 L0,0 L4,8 L8,0 L8,16",                                      // M
    "M0,16 L0,0 L8,16 L8,0",                                           // N
    "M2,0 L6,0 L8,3 L8,13 L6,16 L2,16 L0,13 L0,3 L2,0",                // O
    "M0,16 L0,0 L6,0 L8,2 L8,7 L6,9 L0,9",                             // P
    "M2,0 L6,0 L8,3 L8,13 L6,16 L2,16 L0,13 L0,3 L2,0 M5,12 L8,16",    // Q
    "M0,16 L0,0 L6,0 L8,2 L8,7 L6,9 L0,9 M4,9 L8,16",                  // R
    "M8,2 L6,0 L2,0 L0,2 L0,6 L2,8 L6,8 L8,10 L8,14 L6,16 L2,16 L0,14", // S
    "M0,0 L8,0 M4,0 L4,16",                                            // T
    "M0,0 L0,13 L2,16 L6,16 L8,13 L8,0",                               // U
    "M0,0 L4,16 L8,0",                                                 // V
    "M0,0 L2,16 L4,5 L6,16 L8,0",                                      // W
    "M0,0 L8,16 M8,0 L0,16",                                           // X
    "M0,0 L4,8 L8,0 M4,8 L4,16",                                       // Y
    "M0,0 L8,0 L0,16 L8,16",                                           // Z
    "M6,0 L3,0 L3,16 L6,16",                                           // [
    "M0,0 L8,16",                                                      // \
    "M2,0 L5,0 L5,16 L2,16",                                           // ]
    "M1,4 L4,0 L7,4",                                                  // ^
    "M0,16 L8,16",                                                     // _
    "M3,0 L5,3",                                                       // `
    "M7,6 L7,16 M7,8 L5,6 L2,6 L0,8 L0,14 L2,16 L5,16 L7,14",          // a
    "M0,0 L0,16 M0,8 L2,6 L5,6 L7,8 L7,14 L5,16 L2,16 L0,14",          // b
    "M7,8 L5,6 L2,6 L0,8 L0,14 L2,16 L5,16 L7,14",                     // c
    "M7,0 L7,16 M7,8 L5,6 L2,6 L0,8 L0,14 L2,16 L5,16 L7,14",          // d
    "M0,11 L7,11 L7,8 L5,6 L2,6 L0,8 L0,14 L2,16 L6,16",               // e
    "M6,0 L4,0 L3,2 L3,16 M1,6 L6,6",                                  // f
    "M7,8 L5,6 L2,6 L0,8 L0,14 L2,16 L5,16 L7,14 M7,6 L7,19 L5,21 L1,21 L0,20", // g
    "M0,0 L0,16 M0,8 L2,6 L5,6 L7,8 L7,16",                            // h
    "M4,1 L4,2 M4,6 L4,16",                                            // i
    "M5,1 L5,2 M5,6 L5,19 L3,21 L1,21",                                // j
    "M0,0 L0,16 M6,6 L0,11 M2,9 L7,16",                                // k
    "M4,0 L4,16",                                                      // l
    "M0,6 L0,16 M0,8 L2,6 L3,6 L4,8 L4,16 M4,8 L6,6 L7,6 L8,8 L8,16",  // m
    "M0,6 L0,16 M0,8 L2,6 L5,6 L7,8 L7,16",                            // n
    "M2,6 L5,6 L7,8 L7,14 L5,16 L2,16 L0,14 L0,8 L2,6",                // o
    "M0,6 L0,21 M0,8 L2,6 L5,6 L7,8 L7,14 L5,16 L2,16 L0,14",          // p
    "M7,6 L7,21 M7,8 L5,6 L2,6 L0,8 L0,14 L2,16 L5,16 L7,14",          // q
    "M0,6 L0,16 M0,9 L2,6 L5,6 L7,8",                                  // r
    "M7,7 L5,6 L2,6 L0,7 L0,10 L2,11 L5,11 L7,12 L7,15 L5,16 L2,16 L0,15", // s
    "M3,0 L3,14 L5,16 L7,15 M1,6 L6,6",                                // t
    "M0,6 L0,14 L2,16 L5,16 L7,14 M7,6 L7,16",                         // u
    "M0,6 L4,16 L8,6",                                                 // v
    "M0,6 L1,16 L4,9 L7,16 L8,6",                                      // w
    "M0,6 L7,16 M7,6 L0,16",                                           // x
    "M0,6 L4,16 M8,6 L4,16 L2,21 L0,21",                               // y
    "M0,6 L7,6 L0,16 L7,16",                                           // z
    "M6,0 L4,1 L4,7 L2,8 L4,9 L4,15 L6,16",                            // {
    "M4,0 L4,16",                                                      // |
    "M2,0 L4,1 L4,7 L6,8 L4,9 L4,15 L2,16",                            // }
    "M0,10 L2,7 L6,9 L8,6",                                            // ~
];

/// Rounder companion font on a 10x20 design grid with higher point counts,
/// tuned for the Catmull-Rom smoothing pass.
pub(crate) static PLUME: [&str; 94] = [
    "M5,0 L5,12 M5,17 L5,19",                                          // !
    "M3,0 L3,5 M7,0 L7,5",                                             // "
    "M3,0 L2,20 M8,0 L7,20 M0,7 L10,7 M0,13 L9,13",                    // #
    "M8,3 L6,2 L4,2 L2,3 L2,8 L4,9 L6,9 L8,10 L8,15 L6,17 L4,17 L2,16 M5,0 L5,19", // $
    "M10,0 L0,20 M3,0 L5,2 L3,4 L1,2 L3,0 M7,16 L9,18 L7,20 L5,18 L7,16", // %
    "M10,20 L3,11 L2,8 L2,4 L3,2 L5,2 L6,4 L6,7 L5,10 L1,13 L0,16 L1,19 L3,20 L6,18 L7,16", // &
    "M5,0 L5,5",                                                       // '
    "M7,0 L5,3 L4,7 L4,13 L5,17 L7,20",                                // (
    "M3,0 L5,3 L6,7 L6,13 L5,17 L3,20",                                // )
    "M5,2 L5,12 M1,4 L9,10 M9,4 L1,10",                                // *
    "M5,5 L5,15 M0,10 L10,10",                                         // +
    "M6,17 L5,21",                                                     // ,
    "M0,10 L10,10",                                                    // -
    "M5,18 L5,20",                                                     // .
    "M0,20 L10,0",                                                     // /
    "M3,0 L7,0 L10,4 L10,16 L7,20 L3,20 L0,16 L0,4 L3,0",              // 0
    "M3,4 L6,0 L6,20 M3,20 L9,20",                                     // 1
    "M0,4 L1,1 L4,0 L7,0 L9,2 L9,6 L7,9 L0,17 L0,20 L10,20",           // 2
    "M1,0 L9,0 L5,7 L8,8 L10,11 L10,16 L8,19 L4,20 L1,19 L0,17",       // 3
    "M7,20 L7,0 L0,13 L10,13",                                         // 4
    "M9,0 L1,0 L1,9 L5,8 L8,9 L10,12 L10,16 L8,19 L4,20 L1,19 L0,17",  // 5
    "M9,1 L5,0 L2,2 L0,6 L0,16 L2,19 L5,20 L8,19 L10,16 L10,13 L8,10 L4,10 L0,12", // 6
    "M0,0 L10,0 L4,20",                                                // 7
    "M3,0 L7,0 L9,2 L9,7 L7,9 L3,9 L1,7 L1,2 L3,0 M3,9 L0,12 L0,17 L3,20 L7,20 L10,17 L10,12 L7,9", // 8
    "M10,3 L8,0 L4,0 L1,2 L0,5 L0,8 L2,10 L6,10 L10,8 M10,3 L10,15 L8,19 L4,20 L1,19", // 9
    "M5,5 L5,7 M5,15 L5,17",                                           // :
    "M5,5 L5,7 M6,15 L6,17 L4,21",                                     // ;
    "M9,0 L1,10 L9,20",                                                // <
    "M0,8 L10,8 M0,12 L10,12",                                         // =
    "M1,0 L9,10 L1,20",                                                // >
    "M0,4 L1,1 L4,0 L7,0 L9,2 L9,5 L7,8 L5,10 L5,13 M5,17 L5,19",      // ?
    "M7,13 L4,13 L3,12 L3,7 L4,6 L7,6 L7,13 L9,13 L10,11 L10,4 L8,1 L4,0 L2,1 L0,4 L0,15 L2,19 L5,20 L8,19", // @
    "M0,20 L5,0 L10,20 M2,13 L8,13",                                   // A
    "M1,0 L1,20 M1,0 L7,0 L9,2 L9,7 L7,9 L1,9 M7,9 L9,11 L9,17 L7,20 L1,20", // B
    "M10,4 L8,1 L5,0 L3,0 L0,3 L0,17 L3,20 L5,20 L8,19 L10,16",        // C
    "M1,0 L1,20 M1,0 L6,0 L9,3 L10,7 L10,13 L9,17 L6,20 L1,20",        // D
    "M9,0 L1,0 L1,20 L9,20 M1,9 L7,9",                                 // E
    "M9,0 L1,0 L1,20 M1,9 L7,9",                                       // F
    "M10,4 L8,1 L5,0 L3,0 L0,3 L0,17 L3,20 L6,20 L9,18 L10,15 L10,11 L5,11", // G
    "M1,0 L1,20 M9,0 L9,20 M1,10 L9,10",                               // H
    "M3,0 L7,0 M5,0 L5,20 M3,20 L7,20",                                // I
    "M9,0 L9,16 L7,19 L4,20 L2,19 L0,16 L0,13",                        // J
    "M1,0 L1,20 M9,0 L1,11 M4,7 L10,20",                               // K
    "M1,0 L1,20 L9,20",                                                // L
    "M0,20 L0,0 L5,10 L10,0 L10,20",                                   // M
    "M0,20 L0,0 L10,20 L10,0",                                         // N
    "M3,0 L7,0 L10,3 L10,17 L7,20 L3,20 L0,17 L0,3 L3,0",              // O
    "M1,20 L1,0 L7,0 L9,2 L9,8 L7,10 L1,10",                           // P
    "M3,0 L7,0 L10,3 L10,17 L7,20 L3,20 L0,17 L0,3 L3,0 M6,14 L10,20", // Q
    "M1,20 L1,0 L7,0 L9,2 L9,8 L7,10 L1,10 M5,10 L10,20",              // R
    "M10,3 L8,1 L4,0 L2,1 L0,3 L0,7 L2,9 L8,11 L10,13 L10,17 L8,19 L4,20 L2,19 L0,17", // S
    "M0,0 L10,0 M5,0 L5,20",                                           // T
    "M0,0 L0,16 L2,19 L5,20 L8,19 L10,16 L10,0",                       // U
    "M0,0 L5,20 L10,0",                                                // V
    "M0,0 L2,20 L5,7 L8,20 L10,0",                                     // W
    "M0,0 L10,20 M10,0 L0,20",                                         // X
    "M0,0 L5,10 L10,0 M5,10 L5,20",                                    // Y
    "M0,0 L10,0 L0,20 L10,20",                                         // Z
    "M7,0 L4,0 L4,20 L7,20",                                           // [
    "M0,0 L10,20",                                                     // \
    "M3,0 L6,0 L6,20 L3,20",                                           // ]
    "M2,5 L5,0 L8,5",                                                  // ^
    "M0,20 L10,20",                                                    // _
    "M4,0 L6,4",                                                       // `
    "M9,8 L9,20 M9,10 L7,8 L3,8 L1,10 L0,13 L0,16 L1,19 L3,20 L7,20 L9,18", // a
    "M1,0 L1,20 M1,10 L3,8 L7,8 L9,10 L10,13 L10,16 L9,19 L7,20 L3,20 L1,18", // b
    "M9,10 L7,8 L3,8 L1,10 L0,13 L0,16 L1,19 L3,20 L7,20 L9,18",       // c
    "M9,0 L9,20 M9,10 L7,8 L3,8 L1,10 L0,13 L0,16 L1,19 L3,20 L7,20 L9,18", // d
    "M0,14 L9,14 L9,11 L7,8 L3,8 L1,10 L0,13 L0,16 L1,19 L3,20 L8,20", // e
    "M8,1 L6,0 L4,1 L3,3 L3,20 M1,8 L7,8",                             // f
    "M9,10 L7,8 L3,8 L1,10 L0,13 L0,16 L1,19 L3,20 L7,20 L9,18 M9,8 L9,22 L8,24 L5,25 L2,24 L1,23", // g
    "M1,0 L1,20 M1,10 L3,8 L7,8 L9,10 L9,20",                          // h
    "M5,1 L5,3 M5,8 L5,20",                                            // i
    "M6,1 L6,3 M6,8 L6,22 L5,24 L2,25 L0,24",                          // j
    "M1,0 L1,20 M8,8 L1,14 M4,11 L9,20",                               // k
    "M5,0 L5,18 L6,20",                                                // l
    "M0,8 L0,20 M0,10 L2,8 L4,8 L5,10 L5,20 M5,10 L7,8 L9,8 L10,10 L10,20", // m
    "M1,8 L1,20 M1,10 L3,8 L7,8 L9,10 L9,20",                          // n
    "M3,8 L7,8 L10,11 L10,17 L7,20 L3,20 L0,17 L0,11 L3,8",            // o
    "M1,8 L1,25 M1,10 L3,8 L7,8 L9,10 L10,13 L10,16 L9,19 L7,20 L3,20 L1,18", // p
    "M9,8 L9,25 M9,10 L7,8 L3,8 L1,10 L0,13 L0,16 L1,19 L3,20 L7,20 L9,18", // q
    "M1,8 L1,20 M1,12 L3,9 L5,8 L8,8 L9,10",                           // r
    "M9,9 L7,8 L3,8 L1,9 L1,12 L3,13 L7,14 L9,15 L9,18 L7,20 L3,20 L1,19", // s
    "M3,2 L3,17 L5,20 L8,19 M1,8 L7,8",                                // t
    "M1,8 L1,17 L3,20 L7,20 L9,18 M9,8 L9,20",                         // u
    "M0,8 L5,20 L10,8",                                                // v
    "M0,8 L2,20 L5,11 L8,20 L10,8",                                    // w
    "M0,8 L9,20 M9,8 L0,20",                                           // x
    "M0,8 L5,20 M10,8 L5,22 L3,25 L1,25",                              // y
    "M0,8 L9,8 L0,20 L9,20",                                           // z
    "M7,0 L5,1 L5,8 L3,10 L5,12 L5,19 L7,20",                          // {
    "M5,0 L5,20",                                                      // |
    "M3,0 L5,1 L5,8 L7,10 L5,12 L5,19 L3,20",                          // }
    "M0,13 L2,9 L4,9 L6,11 L8,11 L10,7",                               // ~
];

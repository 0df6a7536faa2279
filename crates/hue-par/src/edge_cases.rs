//! Edge-case and malformed-input coverage for the parser (§8
//! scenarios S1-S6, plus the boundary behaviors those scenarios imply).

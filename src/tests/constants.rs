// Base32 encoding of "12345678901234567890", the reference secret the
// RFC 4226 Appendix D and RFC 6238 Appendix B vectors are computed from
pub const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

use hex_literal::hex;
use numkey::{
    Domain, Error, decode_f32, decode_f64, decode_i8, decode_i16, decode_i32,
    decode_i64, decode_u8, decode_u16, decode_u32, decode_u64, encode_f32,
    encode_f64, encode_i8, encode_i16, encode_i32, encode_i64, encode_u8,
    encode_u16, encode_u32, encode_u64,
};

#[test]
fn uint8_known_patterns() {
    assert_eq!(encode_u8(0), hex!("00"));
    assert_eq!(encode_u8(1), hex!("01"));
    assert_eq!(encode_u8(255), hex!("ff"));
}

#[test]
fn int8_known_patterns() {
    // -128 maps to the smallest byte, 127 to the largest
    assert_eq!(encode_i8(-128), hex!("00"));
    assert_eq!(encode_i8(-1), hex!("7f"));
    assert_eq!(encode_i8(0), hex!("80"));
    assert_eq!(encode_i8(127), hex!("ff"));
}

#[test]
fn output_is_big_endian_on_every_host() {
    assert_eq!(encode_u16(0x0001), hex!("0001"));
    assert_eq!(encode_u32(0x0102_0304), hex!("01020304"));
    assert_eq!(encode_u64(1), hex!("0000000000000001"));
    assert_eq!(encode_i32(1), hex!("80000001"));
    assert_eq!(encode_i64(-1), hex!("7fffffffffffffff"));
}

#[test]
fn float_known_patterns() {
    // 1.0f32 is 0x3F800000; the sign bit is set for non-negatives
    assert_eq!(encode_f32(1.0), hex!("bf800000"));
    // -1.0f32 is 0xBF800000; every byte is complemented for negatives
    assert_eq!(encode_f32(-1.0), hex!("407fffff"));
    assert_eq!(encode_f64(0.0), hex!("8000000000000000"));
    assert_eq!(encode_f64(-2.0), hex!("3fffffffffffffff"));
}

#[test]
fn int16_zero_roundtrip() {
    let encoded = encode_i16(0);
    assert_eq!(encoded, hex!("8000"));
    assert_eq!(decode_i16(&encoded).unwrap(), 0);
}

#[test]
fn signed_extremes_roundtrip() {
    for v in [i8::MIN, -1, 0, 1, i8::MAX] {
        assert_eq!(decode_i8(&encode_i8(v)).unwrap(), v);
    }
    for v in [i16::MIN, -1, 0, 1, i16::MAX] {
        assert_eq!(decode_i16(&encode_i16(v)).unwrap(), v);
    }
    for v in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(decode_i32(&encode_i32(v)).unwrap(), v);
    }
    for v in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert_eq!(decode_i64(&encode_i64(v)).unwrap(), v);
    }
}

#[test]
fn unsigned_extremes_roundtrip() {
    for v in [0, 1, u8::MAX] {
        assert_eq!(decode_u8(&encode_u8(v)).unwrap(), v);
    }
    for v in [0, 1, u16::MAX] {
        assert_eq!(decode_u16(&encode_u16(v)).unwrap(), v);
    }
    for v in [0, 1, u32::MAX] {
        assert_eq!(decode_u32(&encode_u32(v)).unwrap(), v);
    }
    for v in [0, 1, u64::MAX] {
        assert_eq!(decode_u64(&encode_u64(v)).unwrap(), v);
    }
}

#[test]
fn float_extremes_roundtrip() {
    for v in [f32::MIN, -1.5, 0.0, f32::MIN_POSITIVE, 1.5, f32::MAX] {
        assert_eq!(decode_f32(&encode_f32(v)).unwrap(), v);
    }
    for v in [f64::MIN, -1.5, 0.0, f64::MIN_POSITIVE, 1.5, f64::MAX] {
        assert_eq!(decode_f64(&encode_f64(v)).unwrap(), v);
    }
}

#[test]
fn three_bytes_do_not_decode_as_int32() {
    assert_eq!(
        decode_i32(&hex!("010203")).unwrap_err(),
        Error::Length { domain: Domain::Int32, expected: 4, got: 3 }
    );
}

#[test]
fn every_decoder_rejects_off_width_input() {
    assert!(decode_i8(&[]).is_err());
    assert!(decode_u8(&[0, 0]).is_err());
    assert!(decode_i16(&[0]).is_err());
    assert!(decode_u16(&[0, 0, 0]).is_err());
    assert!(decode_i32(&[0u8; 5]).is_err());
    assert!(decode_u32(&[0u8; 3]).is_err());
    assert!(decode_i64(&[0u8; 7]).is_err());
    assert!(decode_u64(&[0u8; 9]).is_err());
    assert!(decode_f32(&[0u8; 8]).is_err());
    assert!(decode_f64(&[0u8; 4]).is_err());
}

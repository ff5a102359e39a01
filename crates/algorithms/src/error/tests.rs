use super::*;
use crate::poly::sampling::{cbd_eta2, cbd_eta3};
use crate::poly::serialize::{compress_poly, decompress_poly, poly_from_bytes};
use crate::poly::{Poly, POLY_BYTES};

#[test]
fn expect_len_passes_exact_and_rejects_everything_else() {
    assert!(Error::expect_len("poly_from_bytes", POLY_BYTES, POLY_BYTES).is_ok());
    let err = Error::expect_len("poly_from_bytes", 100, POLY_BYTES).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "poly_from_bytes",
            expected: POLY_BYTES,
            actual: 100,
        }
    );
}

#[test]
fn truncated_poly_encoding_reports_its_length() {
    // A serialized polynomial cut short must fail before unpacking.
    let err = poly_from_bytes(&[0u8; POLY_BYTES - 3]).unwrap_err();
    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "poly_from_bytes");
            assert_eq!(expected, POLY_BYTES);
            assert_eq!(actual, POLY_BYTES - 3);
        }
        other => panic!("expected Length error, got {other:?}"),
    }
}

#[test]
fn compressed_encoding_length_is_width_dependent() {
    // 128 bytes is a valid d = 4 payload but not a valid d = 10 one.
    assert!(decompress_poly(&[0u8; 128], 4).is_ok());
    let err = decompress_poly(&[0u8; 128], 10).unwrap_err();
    match err {
        Error::Length { expected, actual, .. } => {
            assert_eq!(expected, 320);
            assert_eq!(actual, 128);
        }
        other => panic!("expected Length error, got {other:?}"),
    }
}

#[test]
fn unsupported_compression_width_is_a_parameter_error() {
    let p = Poly::zero();
    let err = compress_poly(&p, 6).unwrap_err();
    assert!(matches!(err, Error::Parameter { name, .. } if name == "compress_poly"));
}

#[test]
fn noise_samplers_reject_short_prf_output() {
    // cbd consumes eta * 64 bytes; a buffer sized for the wrong eta fails.
    assert!(matches!(
        cbd_eta2(&[0u8; 192]).unwrap_err(),
        Error::Length {
            context: "cbd_eta2",
            expected: 128,
            ..
        }
    ));
    assert!(matches!(
        cbd_eta3(&[0u8; 128]).unwrap_err(),
        Error::Length {
            context: "cbd_eta3",
            expected: 192,
            ..
        }
    ));
}

#[test]
fn error_display_formats() {
    let err = Error::Parameter {
        name: "eta",
        reason: "unsupported value",
    };
    assert_eq!(err.to_string(), "Invalid parameter 'eta': unsupported value");

    let err = Error::Length {
        context: "poly_from_bytes",
        expected: POLY_BYTES,
        actual: 16,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for poly_from_bytes: expected 384, got 16"
    );

    let err = Error::Processing {
        operation: "decompress_poly",
        details: "inconsistent chunk",
    };
    assert_eq!(
        err.to_string(),
        "Processing error in decompress_poly: inconsistent chunk"
    );
}

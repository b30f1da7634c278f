#![no_main]

// Decoding must only accept values inside a private range, and must keep the offset into that
// range as the base format id.

use gralloc_format_chooser::{ExtendedFormat, FormatError, PrivateFormatDecoder, PrivateRange};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub value: i32,
    pub yuv_wide_block: bool,
}

fuzz_target!(|input: Input| {
    let decoder = PrivateFormatDecoder::new(input.yuv_wide_block);
    let result = decoder.decode(input.value);

    let Some(range) = PrivateRange::classify(input.value) else {
        assert_eq!(result, Err(FormatError::InvalidFormat(input.value)));
        return;
    };

    let base_id = (input.value - range.base()) as u32;
    match result {
        Ok(format) if format == ExtendedFormat::NONE => assert_eq!(range, PrivateRange::YuvExt),
        Ok(format) => assert_eq!(format.base_id, base_id),
        Err(FormatError::UnsupportedWideBlockFormat(id)) => {
            assert_eq!(range, PrivateRange::AfbcWideBlk);
            assert!(!input.yuv_wide_block);
            assert_eq!(id, base_id);
        }
        Err(e) => panic!("{:#x} is in {range:?} but failed with {e}", input.value),
    }
});

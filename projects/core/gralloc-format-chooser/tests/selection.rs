//! End to end selection against the reference block table.

use gralloc_format_chooser::reference::reference_block_table;
use gralloc_format_chooser::{
    ExtendedFormat, FormatError, FormatModifiers, FormatSelector, HalPixelFormat, InternalFormat,
    PrivateRange, RequestFormat, SelectorConfig, SelectorConfigBuilder, UsageFlags,
};
use rstest::rstest;

const RGBA: i32 = HalPixelFormat::Rgba8888.raw();
const AREA_1080P: i32 = 1920 * 1080;

fn reference_selector() -> FormatSelector {
    FormatSelector::new(reference_block_table(), SelectorConfig::default())
}

fn code(selector: &FormatSelector, format: i32, usage: UsageFlags, size: i32) -> u64 {
    selector
        .select_format(format, usage, size)
        .expect("canonical requests never fail")
        .to_u64()
}

#[test]
fn selection_is_deterministic() {
    let a = reference_selector();
    let b = reference_selector();
    let usage = UsageFlags::HW_TEXTURE | UsageFlags::HW_COMPOSER;

    for request in RequestFormat::all_values() {
        let format = request.pixel_format().raw();
        assert_eq!(code(&a, format, usage, 0), code(&b, format, usage, 0));
        assert_eq!(code(&a, format, usage, 0), code(&a, format, usage, 0));
    }
}

#[rstest]
#[case(UsageFlags::empty())]
#[case(UsageFlags::HW_TEXTURE)]
#[case(UsageFlags::SW_READ_OFTEN)]
fn zero_format_is_zero(#[case] usage: UsageFlags) {
    assert_eq!(code(&reference_selector(), 0, usage, AREA_1080P), 0);
}

#[test]
fn implementation_defined_with_cpu_access_is_ycbcr() {
    let format = code(
        &reference_selector(),
        HalPixelFormat::ImplementationDefined.raw(),
        UsageFlags::HW_TEXTURE | UsageFlags::SW_WRITE_RARELY,
        AREA_1080P,
    );
    assert_eq!(format, HalPixelFormat::YCbCr420_888.raw() as u64);
}

#[rstest]
#[case(HalPixelFormat::Rgba8888, HalPixelFormat::Rgba8888)]
#[case(HalPixelFormat::Yv12, HalPixelFormat::Yv12)]
#[case(HalPixelFormat::ImplementationDefined, HalPixelFormat::YCbCr420_888)]
fn video_encoder_input_is_never_compressed(
    #[case] requested: HalPixelFormat,
    #[case] expected: HalPixelFormat,
) {
    let usage = UsageFlags::HW_VIDEO_ENCODER | UsageFlags::HW_RENDER;
    assert_eq!(
        code(&reference_selector(), requested.raw(), usage, AREA_1080P),
        expected.raw() as u64
    );
}

#[test]
fn no_usage_passes_through() {
    assert_eq!(
        code(&reference_selector(), RGBA, UsageFlags::empty(), AREA_1080P),
        RGBA as u64
    );
}

#[rstest]
#[case(0x7F)]
#[case(HalPixelFormat::YCrCbNv12_10.raw())]
#[case(0x1234_5678)]
fn unrecognized_formats_pass_through(#[case] format: i32) {
    assert_eq!(
        code(&reference_selector(), format, UsageFlags::HW_TEXTURE, 0),
        format as u64
    );
}

#[rstest]
#[case(-2, 0xFFFF_FFFE)]
#[case(i32::MIN, 0x8000_0000)]
fn negative_formats_pass_through_in_the_low_word(#[case] format: i32, #[case] expected: u64) {
    assert_eq!(
        code(&reference_selector(), format, UsageFlags::HW_TEXTURE, 0),
        expected
    );
    assert_eq!(
        code(&reference_selector(), format, UsageFlags::SW_READ_OFTEN, 0),
        expected
    );
}

#[rstest]
#[case(AREA_1080P, InternalFormat::Rgba8888Afbc)]
#[case(AREA_1080P * 3 / 4, InternalFormat::Rgba8888Afbc)]
#[case(AREA_1080P * 3 / 4 - 1, InternalFormat::Rgba8888)]
#[case(4096, InternalFormat::Rgba8888)]
fn compression_is_gated_by_size(#[case] size: i32, #[case] expected: InternalFormat) {
    let selector = FormatSelector::new(
        reference_block_table(),
        SelectorConfigBuilder::new().display_size(1920, 1080).build(),
    );
    assert_eq!(
        selector
            .select_format(RGBA, UsageFlags::HW_TEXTURE, size)
            .unwrap(),
        expected.extended_format()
    );
}

#[rstest]
#[case(UsageFlags::HW_TEXTURE, InternalFormat::Rgba8888Afbc)]
#[case(UsageFlags::HW_COMPOSER, InternalFormat::Rgba8888AfbcSplitBlk)]
// AFBC and split block both end on 150; AFBC gets there first.
#[case(UsageFlags::HW_TEXTURE | UsageFlags::HW_COMPOSER, InternalFormat::Rgba8888Afbc)]
// The camera rejects every compressed layout.
#[case(UsageFlags::HW_TEXTURE | UsageFlags::HW_CAMERA_WRITE, InternalFormat::Rgba8888)]
fn reference_preferences(#[case] usage: UsageFlags, #[case] expected: InternalFormat) {
    let selection = reference_selector().explain(RGBA, usage, 0).unwrap();
    assert_eq!(selection.format, expected.extended_format());
}

#[test]
fn yuv_requests_use_arm_layouts() {
    let format = reference_selector()
        .select_format(
            HalPixelFormat::YCbCr420_888.raw(),
            UsageFlags::HW_TEXTURE,
            0,
        )
        .unwrap();
    assert_eq!(format, InternalFormat::Yuv420Afbc8Bit.extended_format());
    assert!(format.encode().afbc_yuv());
}

#[test]
fn winners_are_supported_by_every_matching_block() {
    let selector = reference_selector();
    let table = reference_block_table();
    let usages = [
        UsageFlags::HW_TEXTURE,
        UsageFlags::HW_RENDER | UsageFlags::HW_COMPOSER,
        UsageFlags::HW_COMPOSER | UsageFlags::HW_CAMERA_READ,
        UsageFlags::HW_2D | UsageFlags::EXTERNAL_DISP | UsageFlags::HW_CAMERA_WRITE,
    ];

    for request in RequestFormat::all_values() {
        for usage in usages {
            let selection = selector
                .explain(request.pixel_format().raw(), usage, 0)
                .unwrap();
            let gralloc_format_chooser::SelectionPath::Scored(candidate) = selection.path else {
                panic!("{request:?} with {usage:?} was not scored: {:?}", selection.path);
            };

            for block in table.matching(usage) {
                assert!(
                    block.weight(*request, candidate).is_some(),
                    "{candidate:?} is unsupported by {:?}",
                    block.kind
                );
            }
        }
    }
}

#[rstest]
#[case(PrivateRange::Afbc, 0x1, FormatModifiers::AFBC)]
#[case(PrivateRange::AfbcSplitBlk, 0x80, FormatModifiers::AFBC_SPLITBLK | FormatModifiers::AFBC_YUV)]
#[case(PrivateRange::YuvExt, 0x85, FormatModifiers::EXTENDED_YUV)]
#[case(PrivateRange::AfbcWideBlk, 0x4, FormatModifiers::AFBC_WIDEBLK)]
fn private_formats_round_trip(
    #[case] range: PrivateRange,
    #[case] base_id: u32,
    #[case] modifiers: FormatModifiers,
) {
    let usage = UsageFlags::HW_TEXTURE | UsageFlags::PRIVATE_FORMAT;
    let format = reference_selector()
        .select_format(range.encode(base_id), usage, 0)
        .unwrap();

    assert_eq!(format, ExtendedFormat::new(base_id, modifiers));
    assert_eq!(format.encode().base_id(), u64::from(base_id));
}

#[rstest]
#[case(0x100)]
#[case(0x300)]
#[case(0x600)]
fn private_formats_outside_every_range_fail(#[case] value: i32) {
    let usage = UsageFlags::HW_TEXTURE | UsageFlags::PRIVATE_FORMAT;
    assert_eq!(
        reference_selector().select_format(value, usage, 0),
        Err(FormatError::InvalidFormat(value))
    );
}

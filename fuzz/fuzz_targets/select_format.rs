#![no_main]

// Selection over arbitrary requests must be deterministic, must only fail for private formats,
// and must never hand out a compressed layout to software or video encoder usage.

use gralloc_format_chooser::reference::reference_block_table;
use gralloc_format_chooser::{
    FormatSelector, HalPixelFormat, SelectionPath, SelectorConfigBuilder, UsageFlags,
};
use libfuzzer_sys::{arbitrary, fuzz_target};
use std::sync::OnceLock;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub format: i32,
    pub usage: u32,
    pub buffer_size: i32,
}

static SELECTOR: OnceLock<FormatSelector> = OnceLock::new();

fuzz_target!(|input: Input| {
    let selector = SELECTOR.get_or_init(|| {
        FormatSelector::new(
            reference_block_table(),
            SelectorConfigBuilder::new().display_size(1920, 1080).build(),
        )
    });

    let usage = UsageFlags::from_bits_retain(input.usage);
    let first = selector.explain(input.format, usage, input.buffer_size);
    let second = selector.explain(input.format, usage, input.buffer_size);
    assert_eq!(first, second);

    let selection = match first {
        Ok(selection) => selection,
        Err(_) => {
            assert!(usage.requests_private_format());
            return;
        }
    };

    if usage.has_software_access() || usage.contains(UsageFlags::HW_VIDEO_ENCODER) {
        assert!(!matches!(selection.path, SelectionPath::Scored(_)));
    }

    if input.format == HalPixelFormat::ImplementationDefined.raw()
        && selection.path == SelectionPath::SoftwareBypass
    {
        assert_eq!(selection.format.to_u64(), HalPixelFormat::YCbCr420_888.raw() as u64);
    }
});

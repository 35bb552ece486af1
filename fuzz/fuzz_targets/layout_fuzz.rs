//! Layout fuzz target: feed arbitrary bytes as a word size and field widths.
//! Computation must not panic; it returns a layout or a LayoutError.
//! Build with: cargo fuzz run layout_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let Some((&word_size, rest)) = data.split_first() else {
        return;
    };
    let widths: Vec<u32> = rest.iter().map(|&b| u32::from(b)).collect();
    if let Ok(layout) = wordlayout::WordLayout::compute(u64::from(word_size), &widths) {
        assert_eq!(
            layout.is_aligned(),
            wordlayout::consts::is_word_aligned(u64::from(word_size), &widths)
        );
        let _ = layout.word_field_ranges();
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run layout_fuzz");
}

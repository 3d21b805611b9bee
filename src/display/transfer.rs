//! Streaming of pixel bytes into the active window.
//!
//! Every function here assumes the caller has just armed the controller with a window and
//! `Command::WriteMemoryStart`. D/C is switched to data once for the whole run and back to
//! command once at the end, never per chunk.

use crate::color::Rgb565;
use crate::interface::DisplayInterface;

/// Length of the repeating solid fill pattern: 16 pixels.
pub const FILL_CHUNK_LEN: usize = 32;

/// Run `f` with D/C selecting data. D/C is returned to command even if `f` fails, and the first
/// error wins.
fn data_run<DI, F>(iface: &mut DI, f: F) -> Result<(), DI::Error>
where
    DI: DisplayInterface,
    F: FnOnce(&mut DI) -> Result<(), DI::Error>,
{
    iface.begin_data()?;
    let result = f(iface);
    let end = iface.end_data();
    result.and(end)
}

/// Stream `total_len` bytes of `color` using a fixed 32-byte pattern, so memory use does not
/// depend on the size of the area being filled. Each transfer carries 32 bytes (or less if the
/// host ceiling `max_transfer` is smaller), except the last which carries the remainder.
pub(crate) fn fill<DI>(
    iface: &mut DI,
    color: Rgb565,
    total_len: usize,
    max_transfer: usize,
) -> Result<(), DI::Error>
where
    DI: DisplayInterface,
{
    let mut pattern = [0u8; FILL_CHUNK_LEN];
    for pixel in pattern.chunks_mut(2) {
        pixel.copy_from_slice(&color.to_be_bytes());
    }
    // Keep whole pixels in each chunk when the ceiling is odd.
    let chunk_len = FILL_CHUNK_LEN.min(max_transfer & !1);
    trace!("fill {=usize} bytes in {=usize} byte chunks", total_len, chunk_len);

    data_run(iface, |iface| {
        let mut bytes_left = total_len;
        while bytes_left > 0 {
            let len = bytes_left.min(chunk_len);
            iface.write_data(&pattern[..len])?;
            bytes_left -= len;
        }
        Ok(())
    })
}

/// Stream `buf` in transfers of at most `max_transfer` bytes.
pub(crate) fn stream<DI>(iface: &mut DI, buf: &[u8], max_transfer: usize) -> Result<(), DI::Error>
where
    DI: DisplayInterface,
{
    trace!("stream {=usize} bytes", buf.len());
    data_run(iface, |iface| {
        for chunk in buf.chunks(max_transfer) {
            iface.write_data(chunk)?;
        }
        Ok(())
    })
}

/// Stream at most `pixel_count` pixels from `iter`. Pixels are packed into a 32-byte buffer which
/// is alternately filled from the iterator and written to the display, stopping when the window
/// has been filled or the iterator runs out.
pub(crate) fn stream_pixels<DI, I>(
    iface: &mut DI,
    mut iter: I,
    pixel_count: usize,
    max_transfer: usize,
) -> Result<(), DI::Error>
where
    DI: DisplayInterface,
    I: Iterator<Item = Rgb565>,
{
    let mut buf = [0u8; FILL_CHUNK_LEN];
    let chunk_len = FILL_CHUNK_LEN.min(max_transfer & !1);
    let mut total_written = 0;

    data_run(iface, |iface| loop {
        let mut filled = 0;
        for slot in buf[..chunk_len].chunks_mut(2) {
            // Stop early once the window is full.
            if total_written >= pixel_count {
                break;
            }
            match iter.next() {
                Some(color) => {
                    slot.copy_from_slice(&color.to_be_bytes());
                    filled += 2;
                    total_written += 1;
                }
                None => break,
            }
        }

        if filled > 0 {
            iface.write_data(&buf[..filled])?;
        }

        // A short chunk means either the window is full or the iterator is exhausted.
        if filled != chunk_len {
            return Ok(());
        }
    })
}

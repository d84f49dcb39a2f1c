use heapless::Vec;

use crate::color::{Rgb, rgb_from_u32, u32_from_rgb};

/// Byte position of each color channel within a pixel's 3-byte slot.
///
/// Strip models disagree on the order they expect channel data in; the
/// permutation is fixed per model and chosen at construction. `Bgr`
/// matches most DotStars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    #[default]
    Bgr,
}

impl ChannelOrder {
    /// Slot offsets as `[red, green, blue]`.
    pub const fn offsets(self) -> [usize; 3] {
        match self {
            Self::Rgb => [0, 1, 2],
            Self::Rbg => [0, 2, 1],
            Self::Grb => [1, 0, 2],
            Self::Gbr => [2, 0, 1],
            Self::Brg => [1, 2, 0],
            Self::Bgr => [2, 1, 0],
        }
    }
}

/// Fixed-capacity store of per-pixel color bytes in channel order.
///
/// Each pixel occupies 3 contiguous bytes whose channel roles come from
/// the configured [`ChannelOrder`]. Stored values are exactly what the
/// caller wrote; global brightness never touches them. The live length
/// is the single bounds authority for every operation here.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    slots: Vec<[u8; 3], MAX_LEDS>,
    order: ChannelOrder,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a buffer of `len` black pixels.
    ///
    /// A `len` beyond `MAX_LEDS` leaves the buffer empty, see
    /// [`Self::resize`].
    pub fn new(len: usize, order: ChannelOrder) -> Self {
        let mut buffer = Self {
            slots: Vec::new(),
            order,
        };
        buffer.resize(len);
        buffer
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Channel order chosen at construction.
    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Resize to `len` pixels, zeroing every slot.
    ///
    /// Prior contents are discarded even when shrinking. A `len` beyond
    /// `MAX_LEDS` degrades to an empty buffer instead of failing, so a
    /// bad length can never take the host down; callers that care check
    /// [`Self::len`] afterwards.
    pub fn resize(&mut self, len: usize) {
        self.slots.clear();
        let _ = self.slots.resize_default(len);
    }

    /// Set pixel `n` from color components.
    ///
    /// Out-of-range writes are silently dropped; bounds stay the
    /// caller's job in hot animation loops.
    pub fn set(&mut self, n: usize, color: Rgb) {
        let [r, g, b] = self.order.offsets();
        if let Some(slot) = self.slots.get_mut(n) {
            slot[r] = color.r;
            slot[g] = color.g;
            slot[b] = color.b;
        }
    }

    /// Set pixel `n` from a packed 0xRRGGBB value.
    pub fn set_packed(&mut self, n: usize, color: u32) {
        self.set(n, rgb_from_u32(color));
    }

    /// Read pixel `n`; out-of-range reads return black.
    pub fn get(&self, n: usize) -> Rgb {
        let [r, g, b] = self.order.offsets();
        self.slots.get(n).map_or(Rgb { r: 0, g: 0, b: 0 }, |slot| Rgb {
            r: slot[r],
            g: slot[g],
            b: slot[b],
        })
    }

    /// Read pixel `n` as a packed 0xRRGGBB value, 0 when out of range.
    pub fn get_packed(&self, n: usize) -> u32 {
        u32_from_rgb(self.get(n))
    }

    /// Fill `count` pixels starting at `first`; `count == 0` fills to
    /// the end of the strip. The range is clipped to the buffer, never
    /// an error.
    pub fn fill(&mut self, color: Rgb, first: usize, count: usize) {
        let len = self.len();
        if first >= len {
            return;
        }
        let end = if count == 0 {
            len
        } else {
            first.saturating_add(count).min(len)
        };
        for n in first..end {
            self.set(n, color);
        }
    }

    /// Zero the whole buffer in one pass.
    pub fn clear(&mut self) {
        self.slots.as_mut_slice().fill([0; 3]);
    }

    /// Raw channel-ordered bytes, 3 per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        self.slots.as_flattened()
    }

    /// Mutable raw bytes, for bulk transfers. Much opportunity for
    /// mayhem; the channel order still applies.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.slots.as_flattened_mut()
    }

    /// Pixel slots in transmission order.
    pub(crate) fn slots(&self) -> &[[u8; 3]] {
        &self.slots
    }
}

pub const ALPHA_SHIFT: u32 = 24;
pub const ALPHA_MASK: u32 = 0xff00_0000;
pub const COLOR_MASK: u32 = 0x00ff_ffff;

pub fn alpha(pixel: u32) -> u8 {
    (pixel >> ALPHA_SHIFT) as u8
}

pub fn is_opaque(pixel: u32) -> bool {
    pixel & ALPHA_MASK != 0
}

/// Adds `amount` to each of the three color channels, clamping to `[0, 255]`.
///
/// Alpha is carried through untouched.
pub fn adjust_pixel(pixel: u32, amount: i32) -> u32 {
    if amount == 0 {
        return pixel;
    }

    let mut out = pixel & ALPHA_MASK;
    for shift in [0u32, 8, 16] {
        let channel = i64::from((pixel >> shift) & 0xff);
        let adjusted = (channel + i64::from(amount)).clamp(0, 255) as u32;
        out |= adjusted << shift;
    }
    out
}

/// Overwrites every element of `buf` with `value`.
pub fn fill(value: u32, buf: &mut [u32]) {
    buf.fill(value);
}

#[cfg(test)]
mod tests {
    use super::{ALPHA_MASK, adjust_pixel, alpha, fill, is_opaque};

    const SAMPLES: [u32; 8] = [
        0x0000_0000,
        0xffff_ffff,
        0xff00_0000,
        0x00ff_ffff,
        0x8012_3456,
        0x01fe_01fe,
        0xdead_beef,
        0x7f80_8080,
    ];

    #[test]
    fn zero_amount_is_identity() {
        for p in SAMPLES {
            assert_eq!(adjust_pixel(p, 0), p);
        }
    }

    #[test]
    fn channels_clamp_and_alpha_survives() {
        for p in SAMPLES {
            for amount in [i32::MIN, -1000, -256, -1, 1, 17, 255, 256, i32::MAX] {
                let out = adjust_pixel(p, amount);
                assert_eq!(out & ALPHA_MASK, p & ALPHA_MASK);
                for shift in [0, 8, 16] {
                    let before = (p >> shift) & 0xff;
                    let after = (out >> shift) & 0xff;
                    if amount > 0 {
                        assert!(after >= before);
                    } else {
                        assert!(after <= before);
                    }
                }
            }
        }
    }

    #[test]
    fn adjust_saturates_each_channel_independently() {
        assert_eq!(adjust_pixel(0xff10_80f0, 32), 0xff30_a0ff);
        assert_eq!(adjust_pixel(0xff10_80f0, -32), 0xff00_60d0);
        assert_eq!(adjust_pixel(0x0012_3456, i32::MAX), 0x00ff_ffff);
        assert_eq!(adjust_pixel(0x0012_3456, i32::MIN), 0x0000_0000);
    }

    #[test]
    fn alpha_helpers() {
        assert_eq!(alpha(0x8012_3456), 0x80);
        assert!(is_opaque(0x0100_0000));
        assert!(!is_opaque(0x00ff_ffff));
    }

    #[test]
    fn fill_overwrites_all() {
        let mut buf = vec![1u32, 2, 3, 4];
        fill(0xdead_beef, &mut buf);
        assert!(buf.iter().all(|&v| v == 0xdead_beef));

        let mut empty: [u32; 0] = [];
        fill(7, &mut empty);
    }
}

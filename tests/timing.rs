mod tests {
    use rmt_led_encoder::{
        BitShapes, Error, LedStripEncoder, LedStripEncoderConfig, Level, PulseSymbol, PulseTiming,
        symbol::MAX_DURATION,
        timing::{reset_symbol, ticks_from_nanos},
    };

    #[test]
    fn test_ticks_truncate() {
        assert_eq!(ticks_from_nanos(10_000_000, 350), Ok(3));
        assert_eq!(ticks_from_nanos(10_000_000, 1000), Ok(10));
        assert_eq!(ticks_from_nanos(10_000_000, 280), Ok(2));
        assert_eq!(ticks_from_nanos(80_000_000, 350), Ok(28));
        assert_eq!(ticks_from_nanos(40_000_000, 1000), Ok(40));
        assert_eq!(ticks_from_nanos(1_000_000, 999), Ok(0));
    }

    #[test]
    fn test_ticks_reject_zero_resolution() {
        assert_eq!(ticks_from_nanos(0, 350), Err(Error::InvalidResolution));
    }

    #[test]
    fn test_ticks_overflow() {
        assert_eq!(ticks_from_nanos(80_000_000, 409_588), Ok(MAX_DURATION));
        assert_eq!(
            ticks_from_nanos(80_000_000, 409_600),
            Err(Error::DurationOverflow { nanos: 409_600 })
        );
    }

    #[test]
    fn test_ws2812_shapes() {
        let shapes = BitShapes::new(10_000_000, &PulseTiming::WS2812).unwrap();
        assert_eq!(shapes.bit0, PulseSymbol::high_low(3, 10));
        assert_eq!(shapes.bit1, PulseSymbol::high_low(10, 3));
        assert_eq!(shapes.symbol(true), shapes.bit1);
        assert_eq!(shapes.symbol(false), shapes.bit0);
    }

    #[test]
    fn test_reset_symbol() {
        let latch = reset_symbol(10_000_000, &PulseTiming::WS2812).unwrap();
        assert_eq!(latch, PulseSymbol::new(Level::Low, 2, Level::Low, 0));

        let strict = reset_symbol(10_000_000, &PulseTiming::WS2812_STRICT_LATCH).unwrap();
        assert_eq!(strict.duration0, 500);
        assert_eq!(strict.level0, Level::Low);
    }

    #[test]
    fn test_reset_symbol_rejects_zero_tick_latch() {
        // 280 ns at 3 MHz truncates to 0 ticks while the bit halves stay non-zero
        assert_eq!(
            reset_symbol(3_000_000, &PulseTiming::WS2812),
            Err(Error::ZeroDuration)
        );
        assert!(BitShapes::new(3_000_000, &PulseTiming::WS2812).is_ok());
        assert!(matches!(
            LedStripEncoder::new(&LedStripEncoderConfig::ws2812(3_000_000)),
            Err(Error::ZeroDuration)
        ));

        let no_latch = PulseTiming {
            reset_ns: 0,
            ..PulseTiming::WS2812
        };
        let latch = reset_symbol(10_000_000, &no_latch).unwrap();
        assert_eq!(latch.duration0, 0);
    }

    #[test]
    fn test_classify() {
        let shapes = BitShapes::new(10_000_000, &PulseTiming::WS2812).unwrap();
        assert_eq!(shapes.classify(shapes.bit0), Some(false));
        assert_eq!(shapes.classify(shapes.bit1), Some(true));
        // Off by a tick still reads back
        assert_eq!(shapes.classify(PulseSymbol::high_low(4, 9)), Some(false));
        assert_eq!(shapes.classify(PulseSymbol::high_low(9, 4)), Some(true));
        assert_eq!(
            shapes.classify(PulseSymbol::new(Level::Low, 2, Level::Low, 0)),
            None
        );
    }

    #[test]
    fn test_symbol_word_layout() {
        let symbol = PulseSymbol::high_low(3, 10);
        assert_eq!(symbol.to_word(), 0x000A_8003);
        assert_eq!(PulseSymbol::from_word(0x000A_8003), symbol);

        let latch = PulseSymbol::new(Level::Low, 2, Level::Low, 0);
        assert_eq!(latch.to_word(), 0x0000_0002);

        let all = PulseSymbol::new(Level::High, MAX_DURATION, Level::High, MAX_DURATION);
        assert_eq!(all.to_word(), u32::MAX);
        assert_eq!(PulseSymbol::from_word(u32::MAX), all);
    }

    #[test]
    fn test_symbol_ticks() {
        assert_eq!(PulseSymbol::high_low(3, 10).ticks(), 13);
        assert_eq!(PulseSymbol::new(Level::Low, 2, Level::Low, 0).ticks(), 2);
    }
}

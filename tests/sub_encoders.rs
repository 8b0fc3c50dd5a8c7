mod tests {
    use rmt_led_encoder::{
        BitOrder, BitShapes, BytesEncoder, EncodeState, Encoder, Error, Level, PulseSymbol,
        PulseTiming, RepeatEncoder, SymbolBuffer,
    };

    fn bytes_encoder() -> BytesEncoder {
        let shapes = BitShapes::new(10_000_000, &PulseTiming::WS2812).unwrap();
        BytesEncoder::new(shapes, BitOrder::MsbFirst).unwrap()
    }

    #[test]
    fn test_bytes_encoder_resumes() {
        let mut encoder = bytes_encoder();
        let data = [0b1010_0000];
        let mut window = [PulseSymbol::default(); 3];

        let mut buffer = SymbolBuffer::new(&mut window);
        assert_eq!(encoder.encode(&mut buffer, &data), (3, EncodeState::Partial));
        assert_eq!(encoder.cursor(), 3);
        let shapes = *encoder.shapes();
        assert_eq!(
            buffer.written(),
            &[shapes.bit1, shapes.bit0, shapes.bit1]
        );

        buffer.clear();
        assert_eq!(encoder.encode(&mut buffer, &data), (3, EncodeState::Partial));
        assert_eq!(encoder.cursor(), 6);

        buffer.clear();
        assert_eq!(encoder.encode(&mut buffer, &data), (2, EncodeState::Complete));
        assert_eq!(encoder.cursor(), 0);
    }

    #[test]
    fn test_bytes_encoder_completes_when_exactly_full() {
        let mut encoder = bytes_encoder();
        let mut window = [PulseSymbol::default(); 8];
        let mut buffer = SymbolBuffer::new(&mut window);
        assert_eq!(encoder.encode(&mut buffer, &[0xFF]), (8, EncodeState::Complete));
    }

    #[test]
    fn test_bytes_encoder_empty_input() {
        let mut encoder = bytes_encoder();
        let mut window = [PulseSymbol::default(); 0];
        let mut buffer = SymbolBuffer::new(&mut window);
        assert_eq!(encoder.encode(&mut buffer, &[]), (0, EncodeState::Complete));
    }

    #[test]
    fn test_bytes_encoder_rejects_zero_duration() {
        // 1 MHz truncates the 350 ns halves to zero ticks
        let shapes = BitShapes::new(1_000_000, &PulseTiming::WS2812).unwrap();
        assert_eq!(
            BytesEncoder::new(shapes, BitOrder::MsbFirst).err(),
            Some(Error::ZeroDuration)
        );
    }

    #[test]
    fn test_repeat_encoder() {
        let symbol = PulseSymbol::new(Level::Low, 7, Level::Low, 0);
        let mut encoder = RepeatEncoder::new(3).unwrap();
        let mut window = [PulseSymbol::default(); 2];
        let mut buffer = SymbolBuffer::new(&mut window);

        assert_eq!(encoder.encode(&mut buffer, &symbol), (2, EncodeState::Partial));
        assert_eq!(encoder.emitted(), 2);
        assert_eq!(buffer.written(), &[symbol, symbol]);

        buffer.clear();
        assert_eq!(encoder.encode(&mut buffer, &symbol), (1, EncodeState::Complete));
        assert_eq!(encoder.emitted(), 0);
    }

    #[test]
    fn test_repeat_encoder_reset() {
        let symbol = PulseSymbol::new(Level::Low, 7, Level::Low, 0);
        let mut encoder = RepeatEncoder::new(2).unwrap();
        let mut window = [PulseSymbol::default(); 1];
        let mut buffer = SymbolBuffer::new(&mut window);
        let _ = encoder.encode(&mut buffer, &symbol);
        assert_eq!(encoder.emitted(), 1);

        encoder.reset().unwrap();
        assert_eq!(encoder.emitted(), 0);
    }

    #[test]
    fn test_repeat_encoder_rejects_zero() {
        assert_eq!(RepeatEncoder::new(0).err(), Some(Error::ZeroRepeat));
    }
}

mod support;

use binnacle::{
    AisMessage, EncodedMessage, Error, Message, Payload, REGISTRY, Registry,
    bits::RangeError,
    decode,
    messages::{ShipAndVoyageData, UtcDateInquiry},
    types::IdentifierError,
};
use support::{BitWriter, load_payloads};

fn inquiry(mmsi: u32) -> Payload {
    BitWriter::header(10, 1, mmsi)
        .zeros(2)
        .unsigned(30, 2_300_000)
        .zeros(2)
        .finish()
}

#[test]
fn standard_registry_covers_all_types() {
    let codes: Vec<u8> = REGISTRY.codes().collect();
    assert_eq!(codes, (1..=27).collect::<Vec<u8>>());
    assert_eq!(Registry::default().codes().count(), 27);
}

#[test]
fn decode_fixtures() {
    for (payload, message_type, repeat_indicator, mmsi) in load_payloads("fixtures/payloads.csv")
    {
        let message = decode(&payload).unwrap();

        assert_eq!(message.message_type(), message_type);
        assert_eq!(message.repeat_indicator(), repeat_indicator);
        assert_eq!(message.mmsi().get(), mmsi);
    }
}

#[test]
fn invalid_message_is_rejected() {
    let payload = inquiry(366_000_001).with_validity(false);

    assert_eq!(decode(&payload), Err(Error::InvalidEncodedMessage));
    assert_eq!(
        UtcDateInquiry::decode(&payload),
        Err(Error::InvalidEncodedMessage)
    );
}

#[test]
fn unknown_type_is_unsupported() {
    for code in [0, 28, 63] {
        let payload = BitWriter::header(code, 0, 366_000_001).pad_to(168).finish();
        assert_eq!(decode(&payload), Err(Error::UnsupportedMessageType(code)));
    }
}

#[test]
fn record_rejects_other_types() {
    let payload = BitWriter::header(22, 0, 2_300_000).pad_to(168).finish();

    assert_eq!(
        ShipAndVoyageData::decode(&payload),
        Err(Error::UnsupportedMessageType(22))
    );
}

#[test]
fn inquiry_decodes() {
    let message = decode(&inquiry(366_000_001)).unwrap();

    let AisMessage::UtcDateInquiry(inquiry) = &message else {
        panic!("unexpected message: {message:?}");
    };

    assert_eq!(inquiry.header.message_type, 10);
    assert_eq!(inquiry.header.repeat_indicator, 1);
    assert_eq!(inquiry.header.mmsi.get(), 366_000_001);
    assert_eq!(inquiry.destination_mmsi.get(), 2_300_000);
    assert_eq!(message.mmsi().get(), 366_000_001);
}

#[test]
fn decoding_is_repeatable() {
    let payload = inquiry(366_000_001);
    assert_eq!(decode(&payload), decode(&payload));
}

#[test]
fn short_message_is_malformed() {
    let payload = BitWriter::header(5, 0, 351_759_000).pad_to(310).finish();

    assert_eq!(
        decode(&payload),
        Err(Error::MalformedField(RangeError::OutOfBounds {
            start: 302,
            end: 422,
            len: 310
        }))
    );
}

#[test]
fn out_of_range_mmsi_fails() {
    assert_eq!(
        decode(&inquiry(1_000_000_000)),
        Err(Error::InvalidIdentifier(IdentifierError::Mmsi(
            1_000_000_000
        )))
    );
}

fn inquiries_only(m: &dyn EncodedMessage) -> Result<AisMessage, Error> {
    UtcDateInquiry::decode(m).map(AisMessage::UtcDateInquiry)
}

const INQUIRIES: Registry = Registry::empty().with(10, inquiries_only);

#[test]
fn custom_registry() {
    assert_eq!(INQUIRIES.codes().collect::<Vec<_>>(), vec![10]);
    assert!(INQUIRIES.get(1).is_none());
    assert!(INQUIRIES.get(64).is_none());

    let message = INQUIRIES.decode(&inquiry(366_000_001)).unwrap();
    assert_eq!(message.message_type(), 10);

    let (payload, ..) = load_payloads("fixtures/payloads.csv").remove(0);
    assert_eq!(
        INQUIRIES.decode(&payload),
        Err(Error::UnsupportedMessageType(1))
    );
}

#[test]
fn decoder_can_be_replaced() {
    fn refuse(m: &dyn EncodedMessage) -> Result<AisMessage, Error> {
        Err(Error::UnsupportedMessageType(m.message_type()))
    }

    let registry = Registry::standard().with(10, refuse);

    assert_eq!(
        registry.decode(&inquiry(366_000_001)),
        Err(Error::UnsupportedMessageType(10))
    );
    assert!(REGISTRY.decode(&inquiry(366_000_001)).is_ok());
}

#[test]
fn shared_across_threads() {
    let payloads: Vec<Payload> = (0..8).map(|i| inquiry(366_000_000 + i)).collect();

    std::thread::scope(|s| {
        for (i, payload) in payloads.iter().enumerate() {
            s.spawn(move || {
                let message = decode(payload).unwrap();
                assert_eq!(message.mmsi().get(), 366_000_000 + i as u32);
            });
        }
    });
}

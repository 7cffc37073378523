use bytes::Bytes;
use graphbinary_codec::{Decoder, Encoder};
use graphbinary_types::GraphBinaryValue;
use uuid::Uuid;

#[test]
fn null_is_a_single_untyped_byte() {
    let encoder = Encoder::new(None);
    let decoder = Decoder::new(None);

    let bytes = encoder.write_object(&GraphBinaryValue::Null).unwrap();
    assert_eq!(&bytes[..], &[0xFE]);
    assert_eq!(decoder.read_object(bytes).unwrap(), GraphBinaryValue::Null);
}

#[test]
fn int_matches_fixed_vector() {
    let bytes = Encoder::new(None).write_object(&GraphBinaryValue::Int(1)).unwrap();
    assert_eq!(&bytes[..], &[0x01, 0x00, 0x00, 0x00, 0x00, 0x01]);
}

#[test]
fn string_matches_fixed_vector() {
    let bytes = Encoder::new(None)
        .write_object(&GraphBinaryValue::String("abc".to_string()))
        .unwrap();
    assert_eq!(&bytes[..], &[0x03, 0x00, 0x00, 0x00, 0x00, 0x03, 0x61, 0x62, 0x63]);
}

#[test]
fn boolean_matches_fixed_vectors() {
    let encoder = Encoder::new(None);
    assert_eq!(&encoder.write_object(&GraphBinaryValue::Boolean(true)).unwrap()[..], &[0x27, 0x00, 0x01]);
    assert_eq!(&encoder.write_object(&GraphBinaryValue::Boolean(false)).unwrap()[..], &[0x27, 0x00, 0x00]);
}

#[test]
fn list_matches_fixed_vector() {
    let value = GraphBinaryValue::List(vec![GraphBinaryValue::Int(1), GraphBinaryValue::String("a".to_string())]);
    let bytes = Encoder::new(None).write_object(&value).unwrap();
    assert_eq!(
        &bytes[..],
        &[
            0x09, 0x00, 0x00, 0x00, 0x00, 0x02, //
            0x01, 0x00, 0x00, 0x00, 0x00, 0x01, //
            0x03, 0x00, 0x00, 0x00, 0x00, 0x01, 0x61,
        ]
    );
}

#[test]
fn uuid_matches_fixed_vector() {
    let uuid = Uuid::parse_str("00112233-4455-6677-8899-aabbccddeeff").unwrap();
    let bytes = Encoder::new(None).write_object(&GraphBinaryValue::Uuid(uuid)).unwrap();
    assert_eq!(
        &bytes[..],
        &[0x0C, 0x00, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]
    );
}

#[test]
fn order_desc_matches_fixed_vector() {
    let bytes = Encoder::new(None)
        .write_object(&GraphBinaryValue::Order(graphbinary_types::Order::Desc))
        .unwrap();
    assert_eq!(&bytes[..], &[0x1A, 0x00, 0x00, 0x00, 0x00, 0x04, 0x64, 0x65, 0x73, 0x63]);
}

#[test]
fn edge_round_trip_preserves_ids_and_labels() {
    use graphbinary_types::{Edge, Vertex};

    let edge = GraphBinaryValue::Edge(Edge::new(
        GraphBinaryValue::Int(9),
        "knows",
        Vertex::new(GraphBinaryValue::Int(1), "person"),
        Vertex::new(GraphBinaryValue::Int(3), "person"),
    ));

    let encoder = Encoder::new(None);
    let decoder = Decoder::new(None);
    let bytes = encoder.write_object(&edge).unwrap();
    let decoded = decoder.read_object(bytes).unwrap();

    let GraphBinaryValue::Edge(decoded) = decoded else {
        panic!("expected an Edge");
    };
    assert_eq!(*decoded.id, GraphBinaryValue::Int(9));
    assert_eq!(decoded.label, "knows");
    assert_eq!(*decoded.out_v.id, GraphBinaryValue::Int(1));
    assert_eq!(decoded.out_v.label, "person");
    assert_eq!(*decoded.in_v.id, GraphBinaryValue::Int(3));
    assert_eq!(decoded.in_v.label, "person");
}

#[test]
fn decode_then_encode_reproduces_the_original_bytes() {
    let decoder = Decoder::new(None);
    let encoder = Encoder::new(None);

    let original = Bytes::from_static(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x2A]);
    let value = decoder.read_object(original.clone()).unwrap();
    let reencoded = encoder.write_object(&value).unwrap();

    assert_eq!(reencoded, original);
}

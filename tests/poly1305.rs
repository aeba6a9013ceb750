use cryptal_poly1305::{Backend, DynContext, Poly1305Error, State, mac, mac_with, verify};

use hex_literal::hex;

const NACL_KEY: [u8; 32] = hex!(
    "eea6a7251c1e72916d11c2cb214d3c25"
    "2539121d8e234e652d651fa4c8cff880"
);

const NACL_MSG: [u8; 131] = hex!(
    "8e993b9f48681273c29650ba32fc76ce"
    "48332ea7164d96a4476fb8c531a1186a"
    "c0dfc17c98dce87b4da7f011ec48c972"
    "71d2c20f9b928fe2270d6fb863d51738"
    "b48eeee314a7cc8ab932164548e526ae"
    "90224368517acfeabd6bb3732bc0e9da"
    "99832b61ca01b6de56244a9e88d5f9b3"
    "7973f622a43d14a6599b1f654cb45a74"
    "e355a5"
);

const NACL_TAG: [u8; 16] = hex!("f3ffc7703f9400e52a7dfb4b3d3305d9");

fn contexts(key: &[u8]) -> Vec<DynContext> {
    Backend::available()
        .iter()
        .map(|&b| DynContext::with_backend(b, key).unwrap())
        .collect()
}

#[test]
fn invalid_key() {
    for &backend in Backend::available() {
        let err = DynContext::with_backend(backend, b"123").unwrap_err();
        assert_eq!(err, Poly1305Error::InvalidKey { len: 3 });
    }
    assert!(matches!(
        mac(&[0u8; 33], b""),
        Err(Poly1305Error::InvalidKey { len: 33 })
    ));
}

#[test]
fn invalid_message() {
    for mut ctx in contexts(b"01234567890123456789012345678901") {
        assert_eq!(ctx.update_opt(None), Err(Poly1305Error::InvalidInput));
    }
}

#[test]
fn zero_key_empty_message() {
    for mut ctx in contexts(&[0u8; 32]) {
        ctx.update(&[]).unwrap();
        assert_eq!(ctx.finish().unwrap(), [0u8; 16]);
    }
}

#[test]
fn nacl() {
    for mut ctx in contexts(&NACL_KEY) {
        ctx.update(&NACL_MSG).unwrap();
        assert_eq!(ctx.finish().unwrap(), NACL_TAG);
    }
}

#[test]
fn nacl_byte_at_a_time() {
    for mut ctx in contexts(&NACL_KEY) {
        for b in NACL_MSG.chunks(1) {
            ctx.update(b).unwrap();
        }
        assert_eq!(ctx.finish().unwrap(), NACL_TAG);
    }
}

#[test]
fn rfc8439_section_2_5_2() {
    let key = hex!("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    let tag = hex!("a8061dc1305136c6c22b8baf0c0127a9");

    for &backend in Backend::available() {
        assert_eq!(
            mac_with(backend, &key, b"Cryptographic Forum Research Group").unwrap(),
            tag
        );
    }
}

#[test]
fn wrap() {
    // generates a final value of (2^130 - 2) == 3
    let mut key = [0u8; 32];
    key[0] = 0x02;

    let mut expected = [0u8; 16];
    expected[0] = 0x03;

    for mut ctx in contexts(&key) {
        ctx.update(&[0xff; 16]).unwrap();
        assert_eq!(ctx.finish().unwrap(), expected);
    }
}

#[test]
fn total() {
    // mac of the macs of messages of length 0 to 255, where the key and
    // messages have all their values set to the length
    let key = hex!("01020304050607fffefdfcfbfaf9ffffffffffffffffffffffffffff00000000");
    let expected = hex!("64afe2e8d6ad7bbdd287f97c44623d39");

    for &backend in Backend::available() {
        let mut total = DynContext::with_backend(backend, &key).unwrap();

        for i in 0..256usize {
            let mut ctx = DynContext::with_backend(backend, &[i as u8; 32]).unwrap();
            ctx.update(&vec![i as u8; i]).unwrap();
            total.update(&ctx.finish().unwrap()).unwrap();
        }

        assert_eq!(total.finish().unwrap(), expected, "backend {backend}");
    }
}

#[test]
fn finished_context_rejects_use() {
    for mut ctx in contexts(&NACL_KEY) {
        ctx.update(&NACL_MSG).unwrap();
        ctx.finish().unwrap();

        assert_eq!(ctx.state(), State::Finalized);
        assert_eq!(ctx.update(b"more"), Err(Poly1305Error::InvalidState));
        assert_eq!(ctx.update_opt(Some(&b""[..])), Err(Poly1305Error::InvalidState));
        assert_eq!(ctx.update_opt(None), Err(Poly1305Error::InvalidState));
        assert_eq!(ctx.finish(), Err(Poly1305Error::InvalidState));
    }
}

#[test]
fn verify_tags() {
    assert!(verify(&NACL_KEY, &NACL_MSG, &NACL_TAG).unwrap());

    let mut forged = NACL_TAG;
    forged[0] ^= 1;
    assert!(!verify(&NACL_KEY, &NACL_MSG, &forged).unwrap());
    assert!(!verify(&NACL_KEY, &NACL_MSG, &NACL_TAG[..8]).unwrap());
    assert!(!verify(&NACL_KEY, &NACL_MSG[..130], &NACL_TAG).unwrap());
}

#[test]
fn backend_names() {
    assert_eq!("limb".parse::<Backend>().unwrap(), Backend::Limb);
    assert_eq!("BigInt".parse::<Backend>().unwrap(), Backend::BigInt);
    assert_eq!(Backend::default(), Backend::Limb);
}

#[cfg(feature = "bigint")]
#[test]
fn bigint_available() {
    assert!(Backend::BigInt.is_available());
    assert_eq!(Backend::available(), &[Backend::Limb, Backend::BigInt]);
}

#[cfg(not(feature = "bigint"))]
#[test]
fn bigint_unavailable() {
    assert!(!Backend::BigInt.is_available());
    assert_eq!(
        mac_with(Backend::BigInt, &[0u8; 32], b"").unwrap_err(),
        Poly1305Error::UnavailableBackend {
            backend: Backend::BigInt
        }
    );
}

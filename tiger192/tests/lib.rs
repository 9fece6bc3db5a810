use hex_literal::hex;
use tiger192::{tiger, tiger2, Digest, Generator, Padding, SBox};

fn check(sbox: &SBox, padding: Padding, cases: &[(&[u8], [u8; 24])]) {
    for (i, &(input, expected)) in cases.iter().enumerate() {
        let reached = Generator::with_config(sbox, 3, padding).update(input).finalize();
        assert_eq!((i, Digest::from(expected)), (i, reached));
    }
}

#[test]
fn tiger_main() {
    let sbox = SBox::new();
    check(&sbox, Padding::Tiger, &[
        (b"", hex!("3293AC630C13F0245F92BBB1766E16167A4E58492DDE73F3")),
        (b"a", hex!("77BEFBEF2E7EF8AB2EC8F93BF587A7FC613E247F5F247809")),
        (b"abc", hex!("2AAB1484E8C158F2BFB8C5FF41B57A525129131C957B5F93")),
        (b"message digest", hex!("D981F8CB78201A950DCF3048751E441C517FCA1AA55A29F6")),
        (b"abcdefghijklmnopqrstuvwxyz", hex!("1714A472EEE57D30040412BFCC55032A0B11602FF37BEEE9")),
        (b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq", hex!("0F7BF9A19B9C58F2B7610DF7E84F0AC3A71C631E7B53F78E")),
        (b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789", hex!("8DCEA680A17583EE502BA38A3C368651890FFBCCDC49A8CC")),
        (b"12345678901234567890123456789012345678901234567890123456789012345678901234567890", hex!("1C14795529FD9F207A958F84C52F11E887FA0CABDFD91BFD")),
    ]);
}

#[test]
fn tiger2_main() {
    let sbox = SBox::new();
    check(&sbox, Padding::Tiger2, &[
        (b"", hex!("4441BE75F6018773C206C22745374B924AA8313FEF919F41")),
        (b"a", hex!("67E6AE8E9E968999F70A23E72AEAA9251CBC7C78A7916636")),
        (b"abc", hex!("F68D7BC5AF4B43A06E048D7829560D4A9415658BB0B1F3BF")),
        (b"message digest", hex!("E29419A1B5FA259DE8005E7DE75078EA81A542EF2552462D")),
        (b"abcdefghijklmnopqrstuvwxyz", hex!("F5B6B6A78C405C8547E91CD8624CB8BE83FC804A474488FD")),
        (b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq", hex!("A6737F3997E8FBB63D20D2DF88F86376B5FE2D5CE36646A9")),
        (b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789", hex!("EA9AB6228CEE7B51B77544FCA6066C8CBB5BBAE6319505CD")),
        (b"12345678901234567890123456789012345678901234567890123456789012345678901234567890", hex!("D85278115329EBAA0EEC85ECDC5396FDA8AA3A5820942FFF")),
    ]);
}

#[test]
fn tiger_1million_a() {
    let sbox = SBox::new();
    let input = vec![b'a'; 1_000_000];

    assert_eq!(
        tiger(&sbox, &input),
        Digest::from(hex!("6DB0E2729CBEAD93D715C6A7D36302E9B3CEE0D2BC314B41"))
    );
    assert_eq!(
        tiger2(&sbox, &input),
        Digest::from(hex!("E068281F060F551628CC5715B9D0226796914D45F7717CF4"))
    );
}

#[test]
fn tiger_1million_a_in_pieces() {
    let sbox = SBox::new();
    let mut gen = Generator::new(&sbox);
    for _ in 0..1000 {
        gen.update(&[b'a'; 1000][..]);
    }

    assert_eq!(gen.finalize().to_string(), "6DB0E2729CBEAD93D715C6A7D36302E9B3CEE0D2BC314B41");
}

#[test]
fn one_shot_helpers_match_generator() {
    let sbox = SBox::new();

    assert_eq!(tiger(&sbox, b"abc"), Generator::new(&sbox).update(b"abc").finalize());
    assert_eq!(tiger2(&sbox, b"abc"), Generator::tiger2(&sbox).update(b"abc").finalize());
}

#[test]
fn independently_built_tables_agree() {
    let a = SBox::new();
    let b = SBox::default();

    assert!(a == b);
    assert_eq!(tiger(&a, b"message digest"), tiger(&b, b"message digest"));
}

#[test]
fn custom_seed_changes_every_digest() {
    let published = SBox::new();
    let custom = SBox::with_seed(b"a different seed", 5);

    assert_ne!(tiger(&published, b""), tiger(&custom, b""));
    assert_ne!(tiger(&published, b"abc"), tiger(&custom, b"abc"));
}

#[test]
fn one_table_serves_many_threads() {
    let sbox = SBox::new();
    let expected = tiger(&sbox, b"abc");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| tiger(&sbox, b"abc")))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

// Building blocks of the compression function. They operate on
// `Wrapping<u64>` locals so that every add, sub and mul wraps mod 2^64.

macro_rules! round {
    ($sbox:ident, $a:ident, $b:ident, $c:ident, $x:ident, $mul:expr) => {{
        $c ^= $x;
        let word = $c.0;
        $a -= Wrapping(
            $sbox[byte(word, 0)]
                ^ $sbox[256 + byte(word, 2)]
                ^ $sbox[512 + byte(word, 4)]
                ^ $sbox[768 + byte(word, 6)],
        );
        $b += Wrapping(
            $sbox[768 + byte(word, 1)]
                ^ $sbox[512 + byte(word, 3)]
                ^ $sbox[256 + byte(word, 5)]
                ^ $sbox[byte(word, 7)],
        );
        $b *= Wrapping($mul);
    }};
}

macro_rules! pass {
    ($sbox:ident, $a:ident, $b:ident, $c:ident, $mul:expr,
     [$x0:ident, $x1:ident, $x2:ident, $x3:ident, $x4:ident, $x5:ident, $x6:ident, $x7:ident]) => {{
        round!($sbox, $a, $b, $c, $x0, $mul);
        round!($sbox, $b, $c, $a, $x1, $mul);
        round!($sbox, $c, $a, $b, $x2, $mul);
        round!($sbox, $a, $b, $c, $x3, $mul);
        round!($sbox, $b, $c, $a, $x4, $mul);
        round!($sbox, $c, $a, $b, $x5, $mul);
        round!($sbox, $a, $b, $c, $x6, $mul);
        round!($sbox, $b, $c, $a, $x7, $mul);
    }};
}

macro_rules! key_schedule {
    ([$x0:ident, $x1:ident, $x2:ident, $x3:ident, $x4:ident, $x5:ident, $x6:ident, $x7:ident]) => {{
        $x0 -= $x7 ^ Wrapping(SCHEDULE_0);
        $x1 ^= $x0;
        $x2 += $x1;
        $x3 -= $x2 ^ ((!$x1) << 19);
        $x4 ^= $x3;
        $x5 += $x4;
        $x6 -= $x5 ^ ((!$x4) >> 23);
        $x7 ^= $x6;
        $x0 += $x7;
        $x1 -= $x0 ^ ((!$x7) << 19);
        $x2 ^= $x1;
        $x3 += $x2;
        $x4 -= $x3 ^ ((!$x2) >> 23);
        $x5 ^= $x4;
        $x6 += $x5;
        $x7 -= $x6 ^ Wrapping(SCHEDULE_1);
    }};
}

macro_rules! compress {
    ($sbox:ident, $passes:expr, $a:ident, $b:ident, $c:ident, $x:tt) => {{
        pass!($sbox, $a, $b, $c, 5, $x);
        key_schedule!($x);
        pass!($sbox, $c, $a, $b, 7, $x);
        key_schedule!($x);
        pass!($sbox, $b, $c, $a, 9, $x);

        for _ in DEFAULT_PASSES..$passes {
            key_schedule!($x);
            pass!($sbox, $a, $b, $c, 9, $x);
            let tmp = $a;
            $a = $c;
            $c = $b;
            $b = tmp;
        }
    }};
}

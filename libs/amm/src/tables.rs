//! Fixed-point constants and precomputed tables
//!
//! Every value here was derived offline with arbitrary-precision arithmetic. Changing
//! any entry changes formula outputs bit for bit.

use bancor_types::{hex, U256};

/// Weights and reserve ratios are expressed in parts per million
pub const MAX_WEIGHT: u32 = 1_000_000;
pub const MIN_PRECISION: usize = 32;
pub const MAX_PRECISION: usize = 127;

/// One in the fixed-point domain: 2^127
pub const FIXED_1: U256 = hex("0x80000000000000000000000000000000");
/// Two in the fixed-point domain
pub const FIXED_2: U256 = hex("0x100000000000000000000000000000000");
/// Exclusive upper bound for the base numerator of [`crate::power`]
pub const MAX_NUM: U256 = hex("0x200000000000000000000000000000000");
/// `ln(2)` as a ratio chosen so `log2 * LN2_NUMERATOR` cannot overflow
pub const LN2_NUMERATOR: U256 = hex("0x3f80fe03f80fe03f80fe03f80fe03f8");
pub const LN2_DENOMINATOR: U256 = hex("0x5b9de1d10bf4103d647b0955897ba80");
/// `e^(1/2^0)` scaled; inputs below use the optimized logarithm
pub const OPT_LOG_MAX_VAL: U256 = hex("0x15bf0a8b1457695355fb8ac404e7a79e3");
/// `2^4` scaled; inputs below use the optimized exponential
pub const OPT_EXP_MAX_VAL: U256 = hex("0x800000000000000000000000000000000");
/// `1/e` scaled; radius of convergence of the Lambert series
pub const LAMBERT_CONV_RADIUS: U256 = hex("0x2f16ac6c59de6f8d5d6f63c1482a7c86");
/// Spacing of the samples in [`LAMBERT_ARRAY`]
pub const LAMBERT_POS2_SAMPLE: U256 = hex("0x3060c183060c183060c183060c18306");
/// Last sampled input of [`LAMBERT_ARRAY`]
pub const LAMBERT_POS2_MAXVAL: U256 = hex("0x1af16ac6c59de6f8d5d6f63c1482a7c80");
/// Largest input the asymptotic Lambert expansion accepts without overflow
pub const LAMBERT_POS3_MAXVAL: U256 = hex("0x6b22d43e72c326539cceeef8bb48f255ff");
/// Largest unnormalized weight that can be scaled by [`MAX_WEIGHT`] in 256 bits
pub const MAX_UNF_WEIGHT: U256 = hex("0x10c6f7a0b5ed8d36b4c7f34938583621fafc8b0079a2834d26fa3fcc9ea9");

/// `(2^-n, e^(2^-n))` pairs, n = 1..8, peeled off before the log series
pub const LOG_HI_TERMS: [(U256, U256); 8] = [
    (hex("0x40000000000000000000000000000000"), hex("0xd3094c70f034de4b96ff7d5b6f99fcd8")),
    (hex("0x20000000000000000000000000000000"), hex("0xa45af1e1f40c333b3de1db4dd55f29a7")),
    (hex("0x10000000000000000000000000000000"), hex("0x910b022db7ae67ce76b441c27035c6a1")),
    (hex("0x8000000000000000000000000000000"), hex("0x88415abbe9a76bead8d00cf112e4d4a8")),
    (hex("0x4000000000000000000000000000000"), hex("0x84102b00893f64c705e841d5d4064bd3")),
    (hex("0x2000000000000000000000000000000"), hex("0x8204055aaef1c8bd5c3259f4822735a2")),
    (hex("0x1000000000000000000000000000000"), hex("0x810100ab00222d861931c15e39b44e99")),
    (hex("0x800000000000000000000000000000"), hex("0x808040155aabbbe9451521693554f733")),
];
/// Taylor terms of `ln((1+y)/(1-y))` as (numerator, denominator)
pub const LOG_LO_TERMS: [(U256, U256); 8] = [
    (hex("0x100000000000000000000000000000000"), hex("0x100000000000000000000000000000000")),
    (hex("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"), hex("0x200000000000000000000000000000000")),
    (hex("0x99999999999999999999999999999999"), hex("0x300000000000000000000000000000000")),
    (hex("0x92492492492492492492492492492492"), hex("0x400000000000000000000000000000000")),
    (hex("0x8e38e38e38e38e38e38e38e38e38e38e"), hex("0x500000000000000000000000000000000")),
    (hex("0x8ba2e8ba2e8ba2e8ba2e8ba2e8ba2e8b"), hex("0x600000000000000000000000000000000")),
    (hex("0x89d89d89d89d89d89d89d89d89d89d89"), hex("0x700000000000000000000000000000000")),
    (hex("0x88888888888888888888888888888888"), hex("0x800000000000000000000000000000000")),
];
/// `20!/i!` for i = 1..20; entry 0 doubles as the common divisor
pub const EXP_LO_TERMS: [U256; 20] = [
    hex("0x21c3677c82b40000"),
    hex("0x10e1b3be415a0000"),
    hex("0x5a0913f6b1e0000"),
    hex("0x168244fdac78000"),
    hex("0x4807432bc18000"),
    hex("0xc0135dca04000"),
    hex("0x1b707b1cdc000"),
    hex("0x36e0f639b800"),
    hex("0x618fee9f800"),
    hex("0x9c197dcc00"),
    hex("0xe30dce400"),
    hex("0x12ebd1300"),
    hex("0x17499f00"),
    hex("0x1a9d480"),
    hex("0x1c6380"),
    hex("0x1c638"),
    hex("0x1ab8"),
    hex("0x17c"),
    hex("0x14"),
    hex("0x1"),
];
/// `(bit, num, den)` with `num/den ~= e^bit` for the bits 2^-3 .. 2^3
pub const EXP_HI_TERMS: [(U256, U256, U256); 7] = [
    (hex("0x10000000000000000000000000000000"), hex("0x1c3d6a24ed82218787d624d3e5eba95f9"), hex("0x18ebef9eac820ae8682b9793ac6d1e776")),
    (hex("0x20000000000000000000000000000000"), hex("0x18ebef9eac820ae8682b9793ac6d1e778"), hex("0x1368b2fc6f9609fe7aceb46aa619baed4")),
    (hex("0x40000000000000000000000000000000"), hex("0x1368b2fc6f9609fe7aceb46aa619baed5"), hex("0xbc5ab1b16779be3575bd8f0520a9f21f")),
    (hex("0x80000000000000000000000000000000"), hex("0xbc5ab1b16779be3575bd8f0520a9f21e"), hex("0x454aaa8efe072e7f6ddbab84b40a55c9")),
    (hex("0x100000000000000000000000000000000"), hex("0x454aaa8efe072e7f6ddbab84b40a55c5"), hex("0x960aadc109e7a3bf4578099615711ea")),
    (hex("0x200000000000000000000000000000000"), hex("0x960aadc109e7a3bf4578099615711d7"), hex("0x2bf84208204f5977f9a8cf01fdce3d")),
    (hex("0x400000000000000000000000000000000"), hex("0x2bf84208204f5977f9a8cf01fdc307"), hex("0x3c6ab775dd0b95b4cbee7e65d11")),
];
/// `33!/i!` for i = 1..33
pub const EXP_COEFFICIENTS: [U256; 33] = [
    hex("0x688589cc0e9505e2f2fee5580000000"),
    hex("0x3442c4e6074a82f1797f72ac0000000"),
    hex("0x116b96f757c380fb287fd0e40000000"),
    hex("0x45ae5bdd5f0e03eca1ff4390000000"),
    hex("0xdefabf91302cd95b9ffda50000000"),
    hex("0x2529ca9832b22439efff9b8000000"),
    hex("0x54f1cf12bd04e516b6da88000000"),
    hex("0xa9e39e257a09ca2d6db51000000"),
    hex("0x12e066e7b839fa050c309000000"),
    hex("0x1e33d7d926c329a1ad1a800000"),
    hex("0x2bee513bdb4a6b19b5f800000"),
    hex("0x3a9316fa79b88eccf2a00000"),
    hex("0x48177ebe1fa812375200000"),
    hex("0x5263fe90242dcbacf00000"),
    hex("0x57e22099c030d94100000"),
    hex("0x57e22099c030d9410000"),
    hex("0x52b6b54569976310000"),
    hex("0x4985f67696bf748000"),
    hex("0x3dea12ea99e498000"),
    hex("0x31880f2214b6e000"),
    hex("0x25bcff56eb36000"),
    hex("0x1b722e10ab1000"),
    hex("0x1317c70077000"),
    hex("0xcba84aafa00"),
    hex("0x82573a0a00"),
    hex("0x5035ad900"),
    hex("0x2f881b00"),
    hex("0x1b29340"),
    hex("0xefc40"),
    hex("0x7fe0"),
    hex("0x420"),
    hex("0x21"),
    hex("0x1"),
];
/// `34!/n! * n^(n-1)` for n = 1..34
pub const LAMBERT_COEFFICIENTS: [U256; 34] = [
    hex("0xde1bc4d19efcac82445da75b00000000"),
    hex("0xde1bc4d19efcac82445da75b00000000"),
    hex("0x14d29a73a6e7b02c3668c7b0880000000"),
    hex("0x2504a0cd9a7f7215b60f9be4800000000"),
    hex("0x484d0a1191c0ead267967c7a4a0000000"),
    hex("0x95ec580d7e8427a4baf26a90a00000000"),
    hex("0x1440b0be1615a47dba6e5b3b1f10000000"),
    hex("0x2d207601f46a99b4112418400000000000"),
    hex("0x66ebaac4c37c622dd8288a7eb1b2000000"),
    hex("0xef17240135f7dbd43a1ba10cf200000000"),
    hex("0x233c33c676a5eb2416094a87b3657000000"),
    hex("0x541cde48bc0254bed49a9f8700000000000"),
    hex("0xcae1fad2cdd4d4cb8d73abca0d19a400000"),
    hex("0x1edb2aa2f760d15c41ceedba956400000000"),
    hex("0x4ba8d20d2dabd386c9529659841a2e200000"),
    hex("0xbac08546b867cdaa20000000000000000000"),
    hex("0x1cfa8e70c03625b9db76c8ebf5bbf24820000"),
    hex("0x4851d99f82060df265f3309b26f8200000000"),
    hex("0xb550d19b129d270c44f6f55f027723cbb0000"),
    hex("0x1c877dadc761dc272deb65d4b0000000000000"),
    hex("0x48178ece97479f33a77f2ad22a81b64406c000"),
    hex("0xb6ca8268b9d810fedf6695ef2f8a6c00000000"),
    hex("0x1d0e76631a5b05d007b8cb72a7c7f11ec36e000"),
    hex("0x4a1c37bd9f85fd9c6c780000000000000000000"),
    hex("0xbd8369f1b702bf491e2ebfcee08250313b65400"),
    hex("0x1e5c7c32a9f6c70ab2cb59d9225764d400000000"),
    hex("0x4dff5820e165e910f95120a708e742496221e600"),
    hex("0xc8c8f66db1fced378ee50e536000000000000000"),
    hex("0x205db8dffff45bfa2938f128f599dbf16eb11d880"),
    hex("0x53a044ebd984351493e1786af38d39a0800000000"),
    hex("0xd86dae2a4cc0f47633a544479735869b487b59c40"),
    hex("0x231000000000000000000000000000000000000000"),
    hex("0x5b0485a76f6646c2039db1507cdd51b08649680822"),
    hex("0xec983c46c49545bc17efa6b5b0055e242200000000"),
];

/// Largest `x` accepted by `general_exp(x, p)` per precision `p`, unscaled
pub const MAX_EXP_ARRAY: [U256; 128] = [
    hex("0xd7"),
    hex("0x19f"),
    hex("0x31b"),
    hex("0x5f6"),
    hex("0xb6e"),
    hex("0x15ec"),
    hex("0x2a0c"),
    hex("0x50a2"),
    hex("0x9aa2"),
    hex("0x1288c"),
    hex("0x238b2"),
    hex("0x4429a"),
    hex("0x82b78"),
    hex("0xfaadc"),
    hex("0x1e0bb8"),
    hex("0x399e96"),
    hex("0x6e7f88"),
    hex("0xd3e7a3"),
    hex("0x1965fea"),
    hex("0x30b5057"),
    hex("0x5d681f3"),
    hex("0xb320d03"),
    hex("0x15784a40"),
    hex("0x292c5bdd"),
    hex("0x4ef57b9b"),
    hex("0x976bd995"),
    hex("0x122624e32"),
    hex("0x22ce03cd5"),
    hex("0x42beef808"),
    hex("0x7ffffffff"),
    hex("0xf577eded5"),
    hex("0x1d6bd8b2eb"),
    hex("0x386bfdba29"),
    hex("0x6c3390ecc8"),
    hex("0xcf8014760f"),
    hex("0x18ded91f0e7"),
    hex("0x2fb1d8fe082"),
    hex("0x5b771955b36"),
    hex("0xaf67a93bb50"),
    hex("0x15060c256cb2"),
    hex("0x285145f31ae5"),
    hex("0x4d5156639708"),
    hex("0x944620b0e70e"),
    hex("0x11c592761c666"),
    hex("0x2214d10d014ea"),
    hex("0x415bc6d6fb7dd"),
    hex("0x7d56e76777fc5"),
    hex("0xf05dc6b27edad"),
    hex("0x1ccf4b44bb4820"),
    hex("0x373fc456c53bb7"),
    hex("0x69f3d1c921891c"),
    hex("0xcb2ff529eb71e4"),
    hex("0x185a82b87b72e95"),
    hex("0x2eb40f9f620fda6"),
    hex("0x5990681d961a1ea"),
    hex("0xabc25204e02828d"),
    hex("0x14962dee9dc97640"),
    hex("0x277abdcdab07d5a7"),
    hex("0x4bb5ecca963d54ab"),
    hex("0x9131271922eaa606"),
    hex("0x116701e6ab0cd188d"),
    hex("0x215f77c045fbe8856"),
    hex("0x3ffffffffffffffff"),
    hex("0x7abbf6f6abb9d087f"),
    hex("0xeb5ec597592befbf4"),
    hex("0x1c35fedd14b861eb04"),
    hex("0x3619c87664579bc94a"),
    hex("0x67c00a3b07ffc01fd6"),
    hex("0xc6f6c8f8739773a7a4"),
    hex("0x17d8ec7f04136f4e561"),
    hex("0x2dbb8caad9b7097b91a"),
    hex("0x57b3d49dda84556d6f6"),
    hex("0xa830612b6591d9d9e61"),
    hex("0x1428a2f98d728ae223dd"),
    hex("0x26a8ab31cb8464ed99e1"),
    hex("0x4a23105873875bd52dfd"),
    hex("0x8e2c93b0e33355320ead"),
    hex("0x110a688680a7530515f3e"),
    hex("0x20ade36b7dbeeb8d79659"),
    hex("0x3eab73b3bbfe282243ce1"),
    hex("0x782ee3593f6d69831c453"),
    hex("0xe67a5a25da41063de1495"),
    hex("0x1b9fe22b629ddbbcdf8754"),
    hex("0x34f9e8e490c48e67e6ab8b"),
    hex("0x6597fa94f5b8f20ac16666"),
    hex("0xc2d415c3db974ab32a5184"),
    hex("0x175a07cfb107ed35ab61430"),
    hex("0x2cc8340ecb0d0f520a6af58"),
    hex("0x55e129027014146b9e37405"),
    hex("0xa4b16f74ee4bb2040a1ec6c"),
    hex("0x13bd5ee6d583ead3bd636b5c"),
    hex("0x25daf6654b1eaa55fd64df5e"),
    hex("0x4898938c9175530325b9d116"),
    hex("0x8b380f3558668c46c91c49a2"),
    hex("0x10afbbe022fdf442b2a522507"),
    hex("0x1ffffffffffffffffffffffff"),
    hex("0x3d5dfb7b55dce843f89a7dbcb"),
    hex("0x75af62cbac95f7dfa3295ec26"),
    hex("0xe1aff6e8a5c30f58221fbf899"),
    hex("0x1b0ce43b322bcde4a56e8ada5a"),
    hex("0x33e0051d83ffe00feb432b473b"),
    hex("0x637b647c39cbb9d3d26c56e949"),
    hex("0xbec763f8209b7a72b0afea0d31"),
    hex("0x16ddc6556cdb84bdc8d12d22e6f"),
    hex("0x2bd9ea4eed422ab6b7b072b029e"),
    hex("0x54183095b2c8ececf30dd533d03"),
    hex("0xa14517cc6b9457111eed5b8adf1"),
    hex("0x13545598e5c23276ccf0ede68034"),
    hex("0x2511882c39c3adea96fec2102329"),
    hex("0x471649d87199aa990756806903c5"),
    hex("0x88534434053a9828af9f37367ee6"),
    hex("0x1056f1b5bedf75c6bcb2ce8aed428"),
    hex("0x1f55b9d9ddff141121e70ebe0104e"),
    hex("0x3c1771ac9fb6b4c18e229803dae82"),
    hex("0x733d2d12ed20831ef0a4aead8c66d"),
    hex("0xdcff115b14eedde6fc3aa5353f2e4"),
    hex("0x1a7cf47248624733f355c5c1f0d1f1"),
    hex("0x32cbfd4a7adc790560b3335687b89b"),
    hex("0x616a0ae1edcba5599528c20605b3f6"),
    hex("0xbad03e7d883f69ad5b0a186184e06b"),
    hex("0x16641a07658687a905357ac0ebe198b"),
    hex("0x2af09481380a0a35cf1ba02f36c6a56"),
    hex("0x5258b7ba7725d902050f6360afddf96"),
    hex("0x9deaf736ac1f569deb1b5ae3f36c130"),
    hex("0x12ed7b32a58f552afeb26faf21deca06"),
    hex("0x244c49c648baa98192dce88b42f53caf"),
    hex("0x459c079aac334623648e24d17c74b3dc"),
    hex("0x857ddf0117efa215952912839f6473e6"),
];

/// `general_exp(MAX_EXP_ARRAY[p], p)`: the largest result each precision can produce
pub const MAX_VAL_ARRAY: [U256; 128] = [
    hex("0x2550a7d99147ce113d27f304d24a422c3d"),
    hex("0x1745f7d567fdd8c93da354496cf4dddf34"),
    hex("0xb5301cf4bf20167721bcdbe218a66f1e0"),
    hex("0x5e2d2ca56fae9ef2e524ba4d0f75b8754"),
    hex("0x2f45acad795bce6dcd748391bb828dcea"),
    hex("0x17f631b6609d1047920e1a1f9613f870d"),
    hex("0xc29d4a7745ae89ef20a05db656441649"),
    hex("0x6242dea9277cf2d473468985313625bb"),
    hex("0x31aef9b37fbc57d1ca51c53eb472c345"),
    hex("0x1923b23c38638957faeb8b4fe57b5ead"),
    hex("0xcb919ec79bf364210433b9b9680eadd"),
    hex("0x67186c63186761709a96a91d44ff2bf"),
    hex("0x343e6242f854acd626b78022c4a8002"),
    hex("0x1a7efb7b1b687ccb2bb413b92d5e413"),
    hex("0xd72d0627fadb6aa6e0f3c994a5592a"),
    hex("0x6d4f32a7dcd0924c122312b7522049"),
    hex("0x37947990f145344d736c1e7e5cff2f"),
    hex("0x1c49d8ceb31e3ef3e98703e0e656cc"),
    hex("0xe69cb6255a180e2ead170f676fa3c"),
    hex("0x75a24620898b4a19aafdfa67d23e8"),
    hex("0x3c1419351dd33d49e1ce203728e25"),
    hex("0x1eb97e709f819575e656eefb8bd98"),
    hex("0xfbc4a1f867f03d4c057d522b6523"),
    hex("0x812507c14867d2237468ba955def"),
    hex("0x425b9d8ca5a58142d5172c3eb2b5"),
    hex("0x2228e76a368b75ea80882c9f6010"),
    hex("0x119ed9f43c52cdd38348ee8d7b23"),
    hex("0x91bfcff5e91c7f115393af54bad"),
    hex("0x4b8845f19f7b4a93653588ce846"),
    hex("0x273fa600431f30b0f21b619c797"),
    hex("0x1474840ba4069691110ff1bb823"),
    hex("0xab212322b671a11d3647e3ecaf"),
    hex("0x59ce8876bf3a3b1b396ae19c95"),
    hex("0x2f523e50d3b0d68a3e39f2f06e"),
    hex("0x190c4f51698c5ee5c3b34928a0"),
    hex("0xd537c5d5647f2a79965d56f94"),
    hex("0x72169649d403b5b512b40d5c2"),
    hex("0x3d713a141a21a93a218c980c1"),
    hex("0x215544c77538e6de9275431a6"),
    hex("0x123c0edc8bf784d147024b7df"),
    hex("0xa11eada236d9ccb5d9a46757"),
    hex("0x59f185464ae514ade263ef14"),
    hex("0x32d507935c586248656e95cb"),
    hex("0x1d2270a4f18efd8eab5a27d7"),
    hex("0x10f7bfaf758e3c1010bead08"),
    hex("0xa101f6bc5df6cc4cf4cb56d"),
    hex("0x61773c45cb6403833991e6e"),
    hex("0x3c5f563f3abca8034b91c7d"),
    hex("0x265cd2a70d374397f75a844"),
    hex("0x1911bbf62c34780ee22ce8e"),
    hex("0x10e3053085e97a7710c2e6d"),
    hex("0xbbfc0e61443560740fa601"),
    hex("0x874f16aa407949aebced14"),
    hex("0x64df208d66f55c59261f5d"),
    hex("0x4dee90487e19a58fbf52e9"),
    hex("0x3e679f9e3b2f65e9d9b0db"),
    hex("0x33c719b34c57f9f7a922f6"),
    hex("0x2c7c090c36927c216fe17c"),
    hex("0x2789fc1ccdbd02af70650f"),
    hex("0x2451aae7a1741e150c6ae0"),
    hex("0x22700f74722225e8c308e6"),
    hex("0x21aae2600cf1170129eb92"),
    hex("0x21e552192ec12eccaa1d44"),
    hex("0x231a0b6c2a250a15897b8a"),
    hex("0x255901ff2640b9b00fef5e"),
    hex("0x28c842993fe2877ca68b09"),
    hex("0x2da7b7138200abf065bc12"),
    hex("0x34584e19c1677771772dbf"),
    hex("0x3d678fd12af3f51aa5828a"),
    hex("0x49a16c994ca36bb50c32c9"),
    hex("0x5a2b2d67887520aacedab6"),
    hex("0x70ac191abaee2a72987db6"),
    hex("0x8f8afbb1a74e96379df7b1"),
    hex("0xba4bd6d86b43467101fd6c"),
    hex("0xf61f8e0679ef553e95c271"),
    hex("0x14ac1e3b06c9771ad8f351c"),
    hex("0x1c3d320c47b0e10030f080e"),
    hex("0x272f678a02b5bd5dcc145a7"),
    hex("0x3732bb25f4914992758a3aa"),
    hex("0x4ee25a85a30b4e758af15a0"),
    hex("0x724dbc7344a886ed20dbae2"),
    hex("0xa7d64de739a14a222daf692"),
    hex("0xf99876906cf6526b6b82ecc"),
    hex("0x177bbaca105a36b48757a319"),
    hex("0x23c442370233418f33964a65"),
    hex("0x3716c05776b217ecbb587d11"),
    hex("0x55c42bb597ed985a9d69778e"),
    hex("0x86e8f9efa6efeba9e16b0a90"),
    hex("0xd651f2e547d194ee8b6d9a69"),
    hex("0x157b681e454d31a35819b1989"),
    hex("0x22c414309a2b397b4f8e0eb28"),
    hex("0x38c1a2330fcf634a5db1378a0"),
    hex("0x5d6efaaf8133556840468bbbb"),
    hex("0x9b0c82dee2e1f20d0a157a7ae"),
    hex("0x10347bdd997b95a7905d850436"),
    hex("0x1b4c902e273a586783055cede8"),
    hex("0x2e50642e85a0b7c589bac2651b"),
    hex("0x4f1b7f75028232ad3258b8b742"),
    hex("0x880028111c381b5279db2271c3"),
    hex("0xeb454460fe475acef6b927865e"),
    hex("0x1996fab0c95ac4a2b5cfa8f555d"),
    hex("0x2cc9f3994685c8d3224acb9fea1"),
    hex("0x4ed2e079d693966878c7149351a"),
    hex("0x8b740d663b523dad8b67451d8fc"),
    hex("0xf7f73c5d826e196ff66a259204c"),
    hex("0x1bb0d7eb2857065dcad087986fa6"),
    hex("0x31b4dfa1eedd2bd17d3504820344"),
    hex("0x599fae8ac47c48cf034887f489bb"),
    hex("0xa249948898a0e444bffa21361f42"),
    hex("0x12711786051c98ca2acc4adf7ba6a"),
    hex("0x21a98821bf01e72cc3f724b65a121"),
    hex("0x3dad0dd7c71f7b443dddd56fede23"),
    hex("0x716933ca69ac1b439f976665fafdf"),
    hex("0xd143a4beebca9707458aad7b22dcd"),
    hex("0x18369cb4cd8522c1b28abc22a3e805"),
    hex("0x2cf816f46d1971ec18f0ffb6922e86"),
    hex("0x53c58e5a59ee4d9fd7f747f67a3aac"),
    hex("0x9c833e3c0364561037250933eab9a9"),
    hex("0x1253c9d983f03e6a0955355049411cb"),
    hex("0x226e05852615979ea99f6ef68dbab51"),
    hex("0x40d8c81134ee9e16db1e0108defbb9f"),
    hex("0x7a70173a27075f4b9482d36deadc951"),
    hex("0xe7b966d76665f99c3fb1791404f62c6"),
    hex("0x1b78e22c38ae6aa69d36b8ccfade23fd"),
    hex("0x3439aeef615a970c9678397b6ad71179"),
    hex("0x637d37d6cb204d7419ac094d7e89f0dd"),
    hex("0xbde80a98943810876a7852209de22be2"),
    hex("0x16b3160a3c604c6667ff40ff1882b0fcf"),
];

/// `W(x)/x` scaled, sampled at `LAMBERT_CONV_RADIUS + 1 + i * LAMBERT_POS2_SAMPLE`
pub const LAMBERT_ARRAY: [U256; 128] = [
    hex("0x60e393c68d20b1bd09deaabc0373b9c5"),
    hex("0x5f8f46e4854120989ed94719fb4c2011"),
    hex("0x5e479ebb9129fb1b7e72a648f992b606"),
    hex("0x5d0bd23fe42dfedde2e9586be12b85fe"),
    hex("0x5bdb29ddee979308ddfca81aeeb8095a"),
    hex("0x5ab4fd8a260d2c7e2c0d2afcf0009dad"),
    hex("0x5998b31359a55d48724c65cf09001221"),
    hex("0x5885bcad2b322dfc43e8860f9c018cf5"),
    hex("0x577b97aa1fe222bb452fdf111b1f0be2"),
    hex("0x5679cb5e3575632e5baa27e2b949f704"),
    hex("0x557fe8241b3a31c83c732f1cdff4a1c5"),
    hex("0x548d868026504875d6e59bbe95fc2a6b"),
    hex("0x53a2465ce347cf34d05a867c17dd3088"),
    hex("0x52bdce5dcd4faed59c7f5511cf8f8acc"),
    hex("0x51dfcb453c07f8da817606e7885f7c3e"),
    hex("0x5107ef6b0a5a2be8f8ff15590daa3cce"),
    hex("0x5035f241d6eae0cd7bacba119993de7b"),
    hex("0x4f698fe90d5b53d532171e1210164c66"),
    hex("0x4ea288ca297a0e6a09a0eee240e16c85"),
    hex("0x4de0a13fdcf5d4213fc398ba6e3becde"),
    hex("0x4d23a145eef91fec06b06140804c4808"),
    hex("0x4c6b5430d4c1ee5526473db4ae0f11de"),
    hex("0x4bb7886c240562eba11f4963a53b4240"),
    hex("0x4b080f3f1cb491d2d521e0ea4583521e"),
    hex("0x4a5cbc96a05589cb4d86be1db3168364"),
    hex("0x49b566d40243517658d78c33162d6ece"),
    hex("0x4911e6a02e5507a30f947383fd9a3276"),
    hex("0x487216c2b31be4adc41db8a8d5cc0c88"),
    hex("0x47d5d3fc4a7a1b188cd3d788b5c5e9fc"),
    hex("0x473cfce4871a2c40bc4f9e1c32b955d0"),
    hex("0x46a771ca578ab878485810e285e31c67"),
    hex("0x4615149718aed4c258c373dc676aa72d"),
    hex("0x4585c8b3f8fe489c6e1833ca47871384"),
    hex("0x44f972f174e41e5efb7e9d63c29ce735"),
    hex("0x446ff970ba86d8b00beb05ecebf3c4dc"),
    hex("0x43e9438ec88971812d6f198b5ccaad96"),
    hex("0x436539d11ff7bea657aeddb394e809ef"),
    hex("0x42e3c5d3e5a913401d86f66db5d81c2c"),
    hex("0x4264d2395303070ea726cbe98df62174"),
    hex("0x41e84a9a593bb7194c3a6349ecae4eea"),
    hex("0x416e1b785d13eba07a08f3f18876a5ab"),
    hex("0x40f6322ff389d423ba9dd7e7e7b7e809"),
    hex("0x40807cec8a466880ecf4184545d240a4"),
    hex("0x400cea9ce88a8d3ae668e8ea0d9bf07f"),
    hex("0x3f9b6ae8772d4c55091e0ed7dfea0ac1"),
    hex("0x3f2bee253fd84594f54bcaafac383a13"),
    hex("0x3ebe654e95208bb9210c575c081c5958"),
    hex("0x3e52c1fc5665635b78ce1f05ad53c086"),
    hex("0x3de8f65ac388101ddf718a6f5c1eff65"),
    hex("0x3d80f522d59bd0b328ca012df4cd2d49"),
    hex("0x3d1ab193129ea72b23648a161163a85a"),
    hex("0x3cb61f68d32576c135b95cfb53f76d75"),
    hex("0x3c5332d9f1aae851a3619e77e4cc8473"),
    hex("0x3bf1e08edbe2aa109e1525f65759ef73"),
    hex("0x3b921d9cff13fa2c197746a3dfc4918f"),
    hex("0x3b33df818910bfc1a5aefb8f63ae2ac4"),
    hex("0x3ad71c1c77e34fa32a9f184967eccbf6"),
    hex("0x3a7bc9abf2c5bb53e2f7384a8a16521a"),
    hex("0x3a21dec7e76369783a68a0c6385a1c57"),
    hex("0x39c9525de6c9cdf7c1c157ca4a7a6ee3"),
    hex("0x39721bad3dc85d1240ff0190e0adaac3"),
    hex("0x391c324344d3248f0469eb28dd3d77e0"),
    hex("0x38c78df7e3c796279fb4ff84394ab3da"),
    hex("0x387426ea4638ae9aae08049d3554c20a"),
    hex("0x3821f57dbd2763256c1a99bbd2051378"),
    hex("0x37d0f256cb46a8c92ff62fbbef289698"),
    hex("0x37811658591ffc7abdd1feaf3cef9b73"),
    hex("0x37325aa10e9e82f7df0f380f7997154b"),
    hex("0x36e4b888cfb408d873b9a80d439311c6"),
    hex("0x3698299e59f4bb9de645fc9b08c64cca"),
    hex("0x364ca7a5012cb603023b57dd3ebfd50d"),
    hex("0x36022c928915b778ab1b06aaee7e61d4"),
    hex("0x35b8b28d1a73dc27500ffe35559cc028"),
    hex("0x357033e951fe250ec5eb4e60955132d7"),
    hex("0x3528ab2867934e3a21b5412e4c4f8881"),
    hex("0x34e212f66c55057f9676c80094a61d59"),
    hex("0x349c66289e5b3c4b540c24f42fa4b9bb"),
    hex("0x34579fbbd0c733a9c8d6af6b0f7d00f7"),
    hex("0x3413bad2e712288b924b5882b5b369bf"),
    hex("0x33d0b2b56286510ef730e213f71f12e9"),
    hex("0x338e82ce00e2496262c64457535ba1a1"),
    hex("0x334d26a96b373bb7c2f8ea1827f27a92"),
    hex("0x330c99f4f4211469e00b3e18c31475ea"),
    hex("0x32ccd87d6486094999c7d5e6f33237d8"),
    hex("0x328dde2dd617b6665a2e8556f250c1af"),
    hex("0x324fa70e9adc270f8262755af5a99af9"),
    hex("0x32122f443110611ca51040f41fa6e1e3"),
    hex("0x31d5730e42c0831482f0f1485c4263d8"),
    hex("0x31996ec6b07b4a83421b5ebc4ab4e1f1"),
    hex("0x315e1ee0a68ff46bb43ec2b85032e876"),
    hex("0x31237fe7bc4deacf6775b9efa1a145f8"),
    hex("0x30e98e7f1cc5a356e44627a6972ea2ff"),
    hex("0x30b04760b8917ec74205a3002650ec05"),
    hex("0x3077a75c803468e9132ce0cf3224241d"),
    hex("0x303fab57a6a275c36f19cda9bace667a"),
    hex("0x3008504beb8dcbd2cf3bc1f6d5a064f0"),
    hex("0x2fd19346ed17dac61219ce0c2c5ac4b0"),
    hex("0x2f9b7169808c324b5852fd3d54ba9714"),
    hex("0x2f65e7e711cf4b064eea9c08cbdad574"),
    hex("0x2f30f405093042ddff8a251b6bf6d103"),
    hex("0x2efc931a3750f2e8bfe323edfe037574"),
    hex("0x2ec8c28e46dbe56d98685278339400cb"),
    hex("0x2e957fd933c3926d8a599b602379b851"),
    hex("0x2e62c882c7c9ed4473412702f08ba0e5"),
    hex("0x2e309a221c12ba361e3ed695167feee2"),
    hex("0x2dfef25d1f865ae18dd07cfea4bcea10"),
    hex("0x2dcdcee821cdc80decc02c44344aeb31"),
    hex("0x2d9d2d8562b34944d0b201bb87260c83"),
    hex("0x2d6d0c04a5b62a2c42636308669b729a"),
    hex("0x2d3d6842c9a235517fc5a0332691528f"),
    hex("0x2d0e402963fe1ea2834abc408c437c10"),
    hex("0x2cdf91ae602647908aff975e4d6a2a8c"),
    hex("0x2cb15ad3a1eb65f6d74a75da09a1b6c5"),
    hex("0x2c8399a6ab8e9774d6fcff373d210727"),
    hex("0x2c564c4046f64edba6883ca06bbc4535"),
    hex("0x2c2970c431f952641e05cb493e23eed3"),
    hex("0x2bfd0560cd9eb14563bc7c0732856c18"),
    hex("0x2bd1084ed0332f7ff4150f9d0ef41a2c"),
    hex("0x2ba577d0fa1628b76d040b12a82492fb"),
    hex("0x2b7a5233cd21581e855e89dc2f1e8a92"),
    hex("0x2b4f95cd46904d05d72bdcde337d9cc7"),
    hex("0x2b2540fc9b4d9abba3faca6691914675"),
    hex("0x2afb5229f68d0830d8be8adb0a0db70f"),
    hex("0x2ad1c7c63a9b294c5bc73a3ba3ab7a2b"),
    hex("0x2aa8a04ac3cbe1ee1c9c86361465dbb8"),
    hex("0x2a7fda392d725a44a2c8aeb9ab35430d"),
    hex("0x2a57741b18cde618717792b4faa216db"),
    hex("0x2a2f6c81f5d84dd950a35626d6d5503a"),
];

//! Power-of-ten approximation tables, one per storage width.
//!
//! Entry `k` holds the top `2w` bits of `10^k`, rounded up (a strict
//! upper approximation for inexact powers) and normalized so the most
//! significant bit is set. Each table spans every decimal exponent the
//! conversion can request for its float width; the subnormal
//! renormalization in `decompose` stretches the binary exponent range,
//! so both tables extend past the exponents reachable from normal
//! values alone. Entries were generated from exact big-integer powers
//! of ten; `tests/pow10_table.rs` re-derives every one.

pub(crate) const POW10_32_MIN: i32 = -31;
pub(crate) const POW10_32_MAX: i32 = 52;

pub(crate) const POW10_64_MIN: i32 = -292;
pub(crate) const POW10_64_MAX: i32 = 340;

#[inline]
pub(crate) fn pow10_32(k: i32) -> u64 {
    debug_assert!(
        POW10_32_MIN <= k && k <= POW10_32_MAX,
        "decimal exponent out of table range"
    );
    POW10_32[(k - POW10_32_MIN) as usize]
}

#[inline]
pub(crate) fn pow10_64(k: i32) -> u128 {
    debug_assert!(
        POW10_64_MIN <= k && k <= POW10_64_MAX,
        "decimal exponent out of table range"
    );
    POW10_64[(k - POW10_64_MIN) as usize]
}

#[rustfmt::skip]
static POW10_32: [u64; (POW10_32_MAX - POW10_32_MIN + 1) as usize] = [
    0x81CEB32C4B43FCF5, // -31
    0xA2425FF75E14FC32, // -30
    0xCAD2F7F5359A3B3F, // -29
    0xFD87B5F28300CA0E, // -28
    0x9E74D1B791E07E49, // -27
    0xC612062576589DDB, // -26
    0xF79687AED3EEC552, // -25
    0x9ABE14CD44753B53, // -24
    0xC16D9A0095928A28, // -23
    0xF1C90080BAF72CB2, // -22
    0x971DA05074DA7BEF, // -21
    0xBCE5086492111AEB, // -20
    0xEC1E4A7DB69561A6, // -19
    0x9392EE8E921D5D08, // -18
    0xB877AA3236A4B44A, // -17
    0xE69594BEC44DE15C, // -16
    0x901D7CF73AB0ACDA, // -15
    0xB424DC35095CD810, // -14
    0xE12E13424BB40E14, // -13
    0x8CBCCC096F5088CC, // -12
    0xAFEBFF0BCB24AAFF, // -11
    0xDBE6FECEBDEDD5BF, // -10
    0x89705F4136B4A598, //  -9
    0xABCC77118461CEFD, //  -8
    0xD6BF94D5E57A42BD, //  -7
    0x8637BD05AF6C69B6, //  -6
    0xA7C5AC471B478424, //  -5
    0xD1B71758E219652C, //  -4
    0x83126E978D4FDF3C, //  -3
    0xA3D70A3D70A3D70B, //  -2
    0xCCCCCCCCCCCCCCCD, //  -1
    0x8000000000000000, //   0
    0xA000000000000000, //   1
    0xC800000000000000, //   2
    0xFA00000000000000, //   3
    0x9C40000000000000, //   4
    0xC350000000000000, //   5
    0xF424000000000000, //   6
    0x9896800000000000, //   7
    0xBEBC200000000000, //   8
    0xEE6B280000000000, //   9
    0x9502F90000000000, //  10
    0xBA43B74000000000, //  11
    0xE8D4A51000000000, //  12
    0x9184E72A00000000, //  13
    0xB5E620F480000000, //  14
    0xE35FA931A0000000, //  15
    0x8E1BC9BF04000000, //  16
    0xB1A2BC2EC5000000, //  17
    0xDE0B6B3A76400000, //  18
    0x8AC7230489E80000, //  19
    0xAD78EBC5AC620000, //  20
    0xD8D726B7177A8000, //  21
    0x878678326EAC9000, //  22
    0xA968163F0A57B400, //  23
    0xD3C21BCECCEDA100, //  24
    0x84595161401484A0, //  25
    0xA56FA5B99019A5C8, //  26
    0xCECB8F27F4200F3A, //  27
    0x813F3978F8940985, //  28
    0xA18F07D736B90BE6, //  29
    0xC9F2C9CD04674EDF, //  30
    0xFC6F7C4045812297, //  31
    0x9DC5ADA82B70B59E, //  32
    0xC5371912364CE306, //  33
    0xF684DF56C3E01BC7, //  34
    0x9A130B963A6C115D, //  35
    0xC097CE7BC90715B4, //  36
    0xF0BDC21ABB48DB21, //  37
    0x96769950B50D88F5, //  38
    0xBC143FA4E250EB32, //  39
    0xEB194F8E1AE525FE, //  40
    0x92EFD1B8D0CF37BF, //  41
    0xB7ABC627050305AE, //  42
    0xE596B7B0C643C71A, //  43
    0x8F7E32CE7BEA5C70, //  44
    0xB35DBF821AE4F38C, //  45
    0xE0352F62A19E306F, //  46
    0x8C213D9DA502DE46, //  47
    0xAF298D050E4395D7, //  48
    0xDAF3F04651D47B4D, //  49
    0x88D8762BF324CD10, //  50
    0xAB0E93B6EFEE0054, //  51
    0xD5D238A4ABE98069, //  52
];

#[rustfmt::skip]
static POW10_64: [u128; (POW10_64_MAX - POW10_64_MIN + 1) as usize] = [
    0xFF77B1FCBEBCDC4F_25E8E89C13BB0F7B, // -292
    0x9FAACF3DF73609B1_77B191618C54E9AD, // -291
    0xC795830D75038C1D_D59DF5B9EF6A2418, // -290
    0xF97AE3D0D2446F25_4B0573286B44AD1E, // -289
    0x9BECCE62836AC577_4EE367F9430AEC33, // -288
    0xC2E801FB244576D5_229C41F793CDA740, // -287
    0xF3A20279ED56D48A_6B43527578C11110, // -286
    0x9845418C345644D6_830A13896B78AAAA, // -285
    0xBE5691EF416BD60C_23CC986BC656D554, // -284
    0xEDEC366B11C6CB8F_2CBFBE86B7EC8AA9, // -283
    0x94B3A202EB1C3F39_7BF7D71432F3D6AA, // -282
    0xB9E08A83A5E34F07_DAF5CCD93FB0CC54, // -281
    0xE858AD248F5C22C9_D1B3400F8F9CFF69, // -280
    0x91376C36D99995BE_23100809B9C21FA2, // -279
    0xB58547448FFFFB2D_ABD40A0C2832A78B, // -278
    0xE2E69915B3FFF9F9_16C90C8F323F516D, // -277
    0x8DD01FAD907FFC3B_AE3DA7D97F6792E4, // -276
    0xB1442798F49FFB4A_99CD11CFDF41779D, // -275
    0xDD95317F31C7FA1D_40405643D711D584, // -274
    0x8A7D3EEF7F1CFC52_482835EA666B2573, // -273
    0xAD1C8EAB5EE43B66_DA3243650005EED0, // -272
    0xD863B256369D4A40_90BED43E40076A83, // -271
    0x873E4F75E2224E68_5A7744A6E804A292, // -270
    0xA90DE3535AAAE202_711515D0A205CB37, // -269
    0xD3515C2831559A83_0D5A5B44CA873E04, // -268
    0x8412D9991ED58091_E858790AFE9486C3, // -267
    0xA5178FFF668AE0B6_626E974DBE39A873, // -266
    0xCE5D73FF402D98E3_FB0A3D212DC81290, // -265
    0x80FA687F881C7F8E_7CE66634BC9D0B9A, // -264
    0xA139029F6A239F72_1C1FFFC1EBC44E81, // -263
    0xC987434744AC874E_A327FFB266B56221, // -262
    0xFBE9141915D7A922_4BF1FF9F0062BAA9, // -261
    0x9D71AC8FADA6C9B5_6F773FC3603DB4AA, // -260
    0xC4CE17B399107C22_CB550FB4384D21D4, // -259
    0xF6019DA07F549B2B_7E2A53A146606A49, // -258
    0x99C102844F94E0FB_2EDA7444CBFC426E, // -257
    0xC0314325637A1939_FA911155FEFB5309, // -256
    0xF03D93EEBC589F88_793555AB7EBA27CB, // -255
    0x96267C7535B763B5_4BC1558B2F3458DF, // -254
    0xBBB01B9283253CA2_9EB1AAEDFB016F17, // -253
    0xEA9C227723EE8BCB_465E15A979C1CADD, // -252
    0x92A1958A7675175F_0BFACD89EC191ECA, // -251
    0xB749FAED14125D36_CEF980EC671F667C, // -250
    0xE51C79A85916F484_82B7E12780E7401B, // -249
    0x8F31CC0937AE58D2_D1B2ECB8B0908811, // -248
    0xB2FE3F0B8599EF07_861FA7E6DCB4AA16, // -247
    0xDFBDCECE67006AC9_67A791E093E1D49B, // -246
    0x8BD6A141006042BD_E0C8BB2C5C6D24E1, // -245
    0xAECC49914078536D_58FAE9F773886E19, // -244
    0xDA7F5BF590966848_AF39A475506A899F, // -243
    0x888F99797A5E012D_6D8406C952429604, // -242
    0xAAB37FD7D8F58178_C8E5087BA6D33B84, // -241
    0xD5605FCDCF32E1D6_FB1E4A9A90880A65, // -240
    0x855C3BE0A17FCD26_5CF2EEA09A550680, // -239
    0xA6B34AD8C9DFC06F_F42FAA48C0EA481F, // -238
    0xD0601D8EFC57B08B_F13B94DAF124DA27, // -237
    0x823C12795DB6CE57_76C53D08D6B70859, // -236
    0xA2CB1717B52481ED_54768C4B0C64CA6F, // -235
    0xCB7DDCDDA26DA268_A9942F5DCF7DFD0A, // -234
    0xFE5D54150B090B02_D3F93B35435D7C4D, // -233
    0x9EFA548D26E5A6E1_C47BC5014A1A6DB0, // -232
    0xC6B8E9B0709F109A_359AB6419CA1091C, // -231
    0xF867241C8CC6D4C0_C30163D203C94B63, // -230
    0x9B407691D7FC44F8_79E0DE63425DCF1E, // -229
    0xC21094364DFB5636_985915FC12F542E5, // -228
    0xF294B943E17A2BC4_3E6F5B7B17B2939E, // -227
    0x979CF3CA6CEC5B5A_A705992CEECF9C43, // -226
    0xBD8430BD08277231_50C6FF782A838354, // -225
    0xECE53CEC4A314EBD_A4F8BF5635246429, // -224
    0x940F4613AE5ED136_871B7795E136BE9A, // -223
    0xB913179899F68584_28E2557B59846E40, // -222
    0xE757DD7EC07426E5_331AEADA2FE589D0, // -221
    0x9096EA6F3848984F_3FF0D2C85DEF7622, // -220
    0xB4BCA50B065ABE63_0FED077A756B53AA, // -219
    0xE1EBCE4DC7F16DFB_D3E8495912C62895, // -218
    0x8D3360F09CF6E4BD_64712DD7ABBBD95D, // -217
    0xB080392CC4349DEC_BD8D794D96AACFB4, // -216
    0xDCA04777F541C567_ECF0D7A0FC5583A1, // -215
    0x89E42CAAF9491B60_F41686C49DB57245, // -214
    0xAC5D37D5B79B6239_311C2875C522CED6, // -213
    0xD77485CB25823AC7_7D633293366B828C, // -212
    0x86A8D39EF77164BC_AE5DFF9C02033198, // -211
    0xA8530886B54DBDEB_D9F57F830283FDFD, // -210
    0xD267CAA862A12D66_D072DF63C324FD7C, // -209
    0x8380DEA93DA4BC60_4247CB9E59F71E6E, // -208
    0xA46116538D0DEB78_52D9BE85F074E609, // -207
    0xCD795BE870516656_67902E276C921F8C, // -206
    0x806BD9714632DFF6_00BA1CD8A3DB53B7, // -205
    0xA086CFCD97BF97F3_80E8A40ECCD228A5, // -204
    0xC8A883C0FDAF7DF0_6122CD128006B2CE, // -203
    0xFAD2A4B13D1B5D6C_796B805720085F82, // -202
    0x9CC3A6EEC6311A63_CBE3303674053BB1, // -201
    0xC3F490AA77BD60FC_BEDBFC4411068A9D, // -200
    0xF4F1B4D515ACB93B_EE92FB5515482D45, // -199
    0x991711052D8BF3C5_751BDD152D4D1C4B, // -198
    0xBF5CD54678EEF0B6_D262D45A78A0635E, // -197
    0xEF340A98172AACE4_86FB897116C87C35, // -196
    0x9580869F0E7AAC0E_D45D35E6AE3D4DA1, // -195
    0xBAE0A846D2195712_8974836059CCA10A, // -194
    0xE998D258869FACD7_2BD1A438703FC94C, // -193
    0x91FF83775423CC06_7B6306A34627DDD0, // -192
    0xB67F6455292CBF08_1A3BC84C17B1D543, // -191
    0xE41F3D6A7377EECA_20CABA5F1D9E4A94, // -190
    0x8E938662882AF53E_547EB47B7282EE9D, // -189
    0xB23867FB2A35B28D_E99E619A4F23AA44, // -188
    0xDEC681F9F4C31F31_6405FA00E2EC94D5, // -187
    0x8B3C113C38F9F37E_DE83BC408DD3DD05, // -186
    0xAE0B158B4738705E_9624AB50B148D446, // -185
    0xD98DDAEE19068C76_3BADD624DD9B0958, // -184
    0x87F8A8D4CFA417C9_E54CA5D70A80E5D7, // -183
    0xA9F6D30A038D1DBC_5E9FCF4CCD211F4D, // -182
    0xD47487CC8470652B_7647C32000696720, // -181
    0x84C8D4DFD2C63F3B_29ECD9F40041E074, // -180
    0xA5FB0A17C777CF09_F468107100525891, // -179
    0xCF79CC9DB955C2CC_7182148D4066EEB5, // -178
    0x81AC1FE293D599BF_C6F14CD848405531, // -177
    0xA21727DB38CB002F_B8ADA00E5A506A7D, // -176
    0xCA9CF1D206FDC03B_A6D90811F0E4851D, // -175
    0xFD442E4688BD304A_908F4A166D1DA664, // -174
    0x9E4A9CEC15763E2E_9A598E4E043287FF, // -173
    0xC5DD44271AD3CDBA_40EFF1E1853F29FE, // -172
    0xF7549530E188C128_D12BEE59E68EF47D, // -171
    0x9A94DD3E8CF578B9_82BB74F8301958CF, // -170
    0xC13A148E3032D6E7_E36A52363C1FAF02, // -169
    0xF18899B1BC3F8CA1_DC44E6C3CB279AC2, // -168
    0x96F5600F15A7B7E5_29AB103A5EF8C0BA, // -167
    0xBCB2B812DB11A5DE_7415D448F6B6F0E8, // -166
    0xEBDF661791D60F56_111B495B3464AD22, // -165
    0x936B9FCEBB25C995_CAB10DD900BEEC35, // -164
    0xB84687C269EF3BFB_3D5D514F40EEA743, // -163
    0xE65829B3046B0AFA_0CB4A5A3112A5113, // -162
    0x8FF71A0FE2C2E6DC_47F0E785EABA72AC, // -161
    0xB3F4E093DB73A093_59ED216765690F57, // -160
    0xE0F218B8D25088B8_306869C13EC3532D, // -159
    0x8C974F7383725573_1E414218C73A13FC, // -158
    0xAFBD2350644EEACF_E5D1929EF90898FB, // -157
    0xDBAC6C247D62A583_DF45F746B74ABF3A, // -156
    0x894BC396CE5DA772_6B8BBA8C328EB784, // -155
    0xAB9EB47C81F5114F_066EA92F3F326565, // -154
    0xD686619BA27255A2_C80A537B0EFEFEBE, // -153
    0x8613FD0145877585_BD06742CE95F5F37, // -152
    0xA798FC4196E952E7_2C48113823B73705, // -151
    0xD17F3B51FCA3A7A0_F75A15862CA504C6, // -150
    0x82EF85133DE648C4_9A984D73DBE722FC, // -149
    0xA3AB66580D5FDAF5_C13E60D0D2E0EBBB, // -148
    0xCC963FEE10B7D1B3_318DF905079926A9, // -147
    0xFFBBCFE994E5C61F_FDF17746497F7053, // -146
    0x9FD561F1FD0F9BD3_FEB6EA8BEDEFA634, // -145
    0xC7CABA6E7C5382C8_FE64A52EE96B8FC1, // -144
    0xF9BD690A1B68637B_3DFDCE7AA3C673B1, // -143
    0x9C1661A651213E2D_06BEA10CA65C084F, // -142
    0xC31BFA0FE5698DB8_486E494FCFF30A63, // -141
    0xF3E2F893DEC3F126_5A89DBA3C3EFCCFB, // -140
    0x986DDB5C6B3A76B7_F89629465A75E01D, // -139
    0xBE89523386091465_F6BBB397F1135824, // -138
    0xEE2BA6C0678B597F_746AA07DED582E2D, // -137
    0x94DB483840B717EF_A8C2A44EB4571CDD, // -136
    0xBA121A4650E4DDEB_92F34D62616CE414, // -135
    0xE896A0D7E51E1566_77B020BAF9C81D18, // -134
    0x915E2486EF32CD60_0ACE1474DC1D122F, // -133
    0xB5B5ADA8AAFF80B8_0D819992132456BB, // -132
    0xE3231912D5BF60E6_10E1FFF697ED6C6A, // -131
    0x8DF5EFABC5979C8F_CA8D3FFA1EF463C2, // -130
    0xB1736B96B6FD83B3_BD308FF8A6B17CB3, // -129
    0xDDD0467C64BCE4A0_AC7CB3F6D05DDBDF, // -128
    0x8AA22C0DBEF60EE4_6BCDF07A423AA96C, // -127
    0xAD4AB7112EB3929D_86C16C98D2C953C7, // -126
    0xD89D64D57A607744_E871C7BF077BA8B8, // -125
    0x87625F056C7C4A8B_11471CD764AD4973, // -124
    0xA93AF6C6C79B5D2D_D598E40D3DD89BD0, // -123
    0xD389B47879823479_4AFF1D108D4EC2C4, // -122
    0x843610CB4BF160CB_CEDF722A585139BB, // -121
    0xA54394FE1EEDB8FE_C2974EB4EE658829, // -120
    0xCE947A3DA6A9273E_733D226229FEEA33, // -119
    0x811CCC668829B887_0806357D5A3F5260, // -118
    0xA163FF802A3426A8_CA07C2DCB0CF26F8, // -117
    0xC9BCFF6034C13052_FC89B393DD02F0B6, // -116
    0xFC2C3F3841F17C67_BBAC2078D443ACE3, // -115
    0x9D9BA7832936EDC0_D54B944B84AA4C0E, // -114
    0xC5029163F384A931_0A9E795E65D4DF12, // -113
    0xF64335BCF065D37D_4D4617B5FF4A16D6, // -112
    0x99EA0196163FA42E_504BCED1BF8E4E46, // -111
    0xC06481FB9BCF8D39_E45EC2862F71E1D7, // -110
    0xF07DA27A82C37088_5D767327BB4E5A4D, // -109
    0x964E858C91BA2655_3A6A07F8D510F870, // -108
    0xBBE226EFB628AFEA_890489F70A55368C, // -107
    0xEADAB0ABA3B2DBE5_2B45AC74CCEA842F, // -106
    0x92C8AE6B464FC96F_3B0B8BC90012929E, // -105
    0xB77ADA0617E3BBCB_09CE6EBB40173745, // -104
    0xE55990879DDCAABD_CC420A6A101D0516, // -103
    0x8F57FA54C2A9EAB6_9FA946824A12232E, // -102
    0xB32DF8E9F3546564_47939822DC96ABFA, // -101
    0xDFF9772470297EBD_59787E2B93BC56F8, // -100
    0x8BFBEA76C619EF36_57EB4EDB3C55B65B, //  -99
    0xAEFAE51477A06B03_EDE622920B6B23F2, //  -98
    0xDAB99E59958885C4_E95FAB368E45ECEE, //  -97
    0x88B402F7FD75539B_11DBCB0218EBB415, //  -96
    0xAAE103B5FCD2A881_D652BDC29F26A11A, //  -95
    0xD59944A37C0752A2_4BE76D3346F04960, //  -94
    0x857FCAE62D8493A5_6F70A4400C562DDC, //  -93
    0xA6DFBD9FB8E5B88E_CB4CCD500F6BB953, //  -92
    0xD097AD07A71F26B2_7E2000A41346A7A8, //  -91
    0x825ECC24C873782F_8ED400668C0C28C9, //  -90
    0xA2F67F2DFA90563B_728900802F0F32FB, //  -89
    0xCBB41EF979346BCA_4F2B40A03AD2FFBA, //  -88
    0xFEA126B7D78186BC_E2F610C84987BFA9, //  -87
    0x9F24B832E6B0F436_0DD9CA7D2DF4D7CA, //  -86
    0xC6EDE63FA05D3143_91503D1C79720DBC, //  -85
    0xF8A95FCF88747D94_75A44C6397CE912B, //  -84
    0x9B69DBE1B548CE7C_C986AFBE3EE11ABB, //  -83
    0xC24452DA229B021B_FBE85BADCE996169, //  -82
    0xF2D56790AB41C2A2_FAE27299423FB9C4, //  -81
    0x97C560BA6B0919A5_DCCD879FC967D41B, //  -80
    0xBDB6B8E905CB600F_5400E987BBC1C921, //  -79
    0xED246723473E3813_290123E9AAB23B69, //  -78
    0x9436C0760C86E30B_F9A0B6720AAF6522, //  -77
    0xB94470938FA89BCE_F808E40E8D5B3E6A, //  -76
    0xE7958CB87392C2C2_B60B1D1230B20E05, //  -75
    0x90BD77F3483BB9B9_B1C6F22B5E6F48C3, //  -74
    0xB4ECD5F01A4AA828_1E38AEB6360B1AF4, //  -73
    0xE2280B6C20DD5232_25C6DA63C38DE1B1, //  -72
    0x8D590723948A535F_579C487E5A38AD0F, //  -71
    0xB0AF48EC79ACE837_2D835A9DF0C6D852, //  -70
    0xDCDB1B2798182244_F8E431456CF88E66, //  -69
    0x8A08F0F8BF0F156B_1B8E9ECB641B5900, //  -68
    0xAC8B2D36EED2DAC5_E272467E3D222F40, //  -67
    0xD7ADF884AA879177_5B0ED81DCC6ABB10, //  -66
    0x86CCBB52EA94BAEA_98E947129FC2B4EA, //  -65
    0xA87FEA27A539E9A5_3F2398D747B36225, //  -64
    0xD29FE4B18E88640E_8EEC7F0D19A03AAE, //  -63
    0x83A3EEEEF9153E89_1953CF68300424AD, //  -62
    0xA48CEAAAB75A8E2B_5FA8C3423C052DD8, //  -61
    0xCDB02555653131B6_3792F412CB06794E, //  -60
    0x808E17555F3EBF11_E2BBD88BBEE40BD1, //  -59
    0xA0B19D2AB70E6ED6_5B6ACEAEAE9D0EC5, //  -58
    0xC8DE047564D20A8B_F245825A5A445276, //  -57
    0xFB158592BE068D2E_EED6E2F0F0D56713, //  -56
    0x9CED737BB6C4183D_55464DD69685606C, //  -55
    0xC428D05AA4751E4C_AA97E14C3C26B887, //  -54
    0xF53304714D9265DF_D53DD99F4B3066A9, //  -53
    0x993FE2C6D07B7FAB_E546A8038EFE402A, //  -52
    0xBF8FDB78849A5F96_DE98520472BDD034, //  -51
    0xEF73D256A5C0F77C_963E66858F6D4441, //  -50
    0x95A8637627989AAD_DDE7001379A44AA9, //  -49
    0xBB127C53B17EC159_5560C018580D5D53, //  -48
    0xE9D71B689DDE71AF_AAB8F01E6E10B4A7, //  -47
    0x9226712162AB070D_CAB3961304CA70E9, //  -46
    0xB6B00D69BB55C8D1_3D607B97C5FD0D23, //  -45
    0xE45C10C42A2B3B05_8CB89A7DB77C506B, //  -44
    0x8EB98A7A9A5B04E3_77F3608E92ADB243, //  -43
    0xB267ED1940F1C61C_55F038B237591ED4, //  -42
    0xDF01E85F912E37A3_6B6C46DEC52F6689, //  -41
    0x8B61313BBABCE2C6_2323AC4B3B3DA016, //  -40
    0xAE397D8AA96C1B77_ABEC975E0A0D081B, //  -39
    0xD9C7DCED53C72255_96E7BD358C904A22, //  -38
    0x881CEA14545C7575_7E50D64177DA2E55, //  -37
    0xAA242499697392D2_DDE50BD1D5D0B9EA, //  -36
    0xD4AD2DBFC3D07787_955E4EC64B44E865, //  -35
    0x84EC3C97DA624AB4_BD5AF13BEF0B113F, //  -34
    0xA6274BBDD0FADD61_ECB1AD8AEACDD58F, //  -33
    0xCFB11EAD453994BA_67DE18EDA5814AF3, //  -32
    0x81CEB32C4B43FCF4_80EACF948770CED8, //  -31
    0xA2425FF75E14FC31_A1258379A94D028E, //  -30
    0xCAD2F7F5359A3B3E_096EE45813A04331, //  -29
    0xFD87B5F28300CA0D_8BCA9D6E188853FD, //  -28
    0x9E74D1B791E07E48_775EA264CF55347E, //  -27
    0xC612062576589DDA_95364AFE032A819E, //  -26
    0xF79687AED3EEC551_3A83DDBD83F52205, //  -25
    0x9ABE14CD44753B52_C4926A9672793543, //  -24
    0xC16D9A0095928A27_75B7053C0F178294, //  -23
    0xF1C90080BAF72CB1_5324C68B12DD6339, //  -22
    0x971DA05074DA7BEE_D3F6FC16EBCA5E04, //  -21
    0xBCE5086492111AEA_88F4BB1CA6BCF585, //  -20
    0xEC1E4A7DB69561A5_2B31E9E3D06C32E6, //  -19
    0x9392EE8E921D5D07_3AFF322E62439FD0, //  -18
    0xB877AA3236A4B449_09BEFEB9FAD487C3, //  -17
    0xE69594BEC44DE15B_4C2EBE687989A9B4, //  -16
    0x901D7CF73AB0ACD9_0F9D37014BF60A11, //  -15
    0xB424DC35095CD80F_538484C19EF38C95, //  -14
    0xE12E13424BB40E13_2865A5F206B06FBA, //  -13
    0x8CBCCC096F5088CB_F93F87B7442E45D4, //  -12
    0xAFEBFF0BCB24AAFE_F78F69A51539D749, //  -11
    0xDBE6FECEBDEDD5BE_B573440E5A884D1C, //  -10
    0x89705F4136B4A597_31680A88F8953031, //   -9
    0xABCC77118461CEFC_FDC20D2B36BA7C3E, //   -8
    0xD6BF94D5E57A42BC_3D32907604691B4D, //   -7
    0x8637BD05AF6C69B5_A63F9A49C2C1B110, //   -6
    0xA7C5AC471B478423_0FCF80DC33721D54, //   -5
    0xD1B71758E219652B_D3C36113404EA4A9, //   -4
    0x83126E978D4FDF3B_645A1CAC083126EA, //   -3
    0xA3D70A3D70A3D70A_3D70A3D70A3D70A4, //   -2
    0xCCCCCCCCCCCCCCCC_CCCCCCCCCCCCCCCD, //   -1
    0x8000000000000000_0000000000000000, //    0
    0xA000000000000000_0000000000000000, //    1
    0xC800000000000000_0000000000000000, //    2
    0xFA00000000000000_0000000000000000, //    3
    0x9C40000000000000_0000000000000000, //    4
    0xC350000000000000_0000000000000000, //    5
    0xF424000000000000_0000000000000000, //    6
    0x9896800000000000_0000000000000000, //    7
    0xBEBC200000000000_0000000000000000, //    8
    0xEE6B280000000000_0000000000000000, //    9
    0x9502F90000000000_0000000000000000, //   10
    0xBA43B74000000000_0000000000000000, //   11
    0xE8D4A51000000000_0000000000000000, //   12
    0x9184E72A00000000_0000000000000000, //   13
    0xB5E620F480000000_0000000000000000, //   14
    0xE35FA931A0000000_0000000000000000, //   15
    0x8E1BC9BF04000000_0000000000000000, //   16
    0xB1A2BC2EC5000000_0000000000000000, //   17
    0xDE0B6B3A76400000_0000000000000000, //   18
    0x8AC7230489E80000_0000000000000000, //   19
    0xAD78EBC5AC620000_0000000000000000, //   20
    0xD8D726B7177A8000_0000000000000000, //   21
    0x878678326EAC9000_0000000000000000, //   22
    0xA968163F0A57B400_0000000000000000, //   23
    0xD3C21BCECCEDA100_0000000000000000, //   24
    0x84595161401484A0_0000000000000000, //   25
    0xA56FA5B99019A5C8_0000000000000000, //   26
    0xCECB8F27F4200F3A_0000000000000000, //   27
    0x813F3978F8940984_4000000000000000, //   28
    0xA18F07D736B90BE5_5000000000000000, //   29
    0xC9F2C9CD04674EDE_A400000000000000, //   30
    0xFC6F7C4045812296_4D00000000000000, //   31
    0x9DC5ADA82B70B59D_F020000000000000, //   32
    0xC5371912364CE305_6C28000000000000, //   33
    0xF684DF56C3E01BC6_C732000000000000, //   34
    0x9A130B963A6C115C_3C7F400000000000, //   35
    0xC097CE7BC90715B3_4B9F100000000000, //   36
    0xF0BDC21ABB48DB20_1E86D40000000000, //   37
    0x96769950B50D88F4_1314448000000000, //   38
    0xBC143FA4E250EB31_17D955A000000000, //   39
    0xEB194F8E1AE525FD_5DCFAB0800000000, //   40
    0x92EFD1B8D0CF37BE_5AA1CAE500000000, //   41
    0xB7ABC627050305AD_F14A3D9E40000000, //   42
    0xE596B7B0C643C719_6D9CCD05D0000000, //   43
    0x8F7E32CE7BEA5C6F_E4820023A2000000, //   44
    0xB35DBF821AE4F38B_DDA2802C8A800000, //   45
    0xE0352F62A19E306E_D50B2037AD200000, //   46
    0x8C213D9DA502DE45_4526F422CC340000, //   47
    0xAF298D050E4395D6_9670B12B7F410000, //   48
    0xDAF3F04651D47B4C_3C0CDD765F114000, //   49
    0x88D8762BF324CD0F_A5880A69FB6AC800, //   50
    0xAB0E93B6EFEE0053_8EEA0D047A457A00, //   51
    0xD5D238A4ABE98068_72A4904598D6D880, //   52
    0x85A36366EB71F041_47A6DA2B7F864750, //   53
    0xA70C3C40A64E6C51_999090B65F67D924, //   54
    0xD0CF4B50CFE20765_FFF4B4E3F741CF6D, //   55
    0x82818F1281ED449F_BFF8F10E7A8921A5, //   56
    0xA321F2D7226895C7_AFF72D52192B6A0E, //   57
    0xCBEA6F8CEB02BB39_9BF4F8A69F764491, //   58
    0xFEE50B7025C36A08_02F236D04753D5B5, //   59
    0x9F4F2726179A2245_01D762422C946591, //   60
    0xC722F0EF9D80AAD6_424D3AD2B7B97EF6, //   61
    0xF8EBAD2B84E0D58B_D2E0898765A7DEB3, //   62
    0x9B934C3B330C8577_63CC55F49F88EB30, //   63
    0xC2781F49FFCFA6D5_3CBF6B71C76B25FC, //   64
    0xF316271C7FC3908A_8BEF464E3945EF7B, //   65
    0x97EDD871CFDA3A56_97758BF0E3CBB5AD, //   66
    0xBDE94E8E43D0C8EC_3D52EEED1CBEA318, //   67
    0xED63A231D4C4FB27_4CA7AAA863EE4BDE, //   68
    0x945E455F24FB1CF8_8FE8CAA93E74EF6B, //   69
    0xB975D6B6EE39E436_B3E2FD538E122B45, //   70
    0xE7D34C64A9C85D44_60DBBCA87196B617, //   71
    0x90E40FBEEA1D3A4A_BC8955E946FE31CE, //   72
    0xB51D13AEA4A488DD_6BABAB6398BDBE42, //   73
    0xE264589A4DCDAB14_C696963C7EED2DD2, //   74
    0x8D7EB76070A08AEC_FC1E1DE5CF543CA3, //   75
    0xB0DE65388CC8ADA8_3B25A55F43294BCC, //   76
    0xDD15FE86AFFAD912_49EF0EB713F39EBF, //   77
    0x8A2DBF142DFCC7AB_6E3569326C784338, //   78
    0xACB92ED9397BF996_49C2C37F07965405, //   79
    0xD7E77A8F87DAF7FB_DC33745EC97BE907, //   80
    0x86F0AC99B4E8DAFD_69A028BB3DED71A4, //   81
    0xA8ACD7C0222311BC_C40832EA0D68CE0D, //   82
    0xD2D80DB02AABD62B_F50A3FA490C30191, //   83
    0x83C7088E1AAB65DB_792667C6DA79E0FB, //   84
    0xA4B8CAB1A1563F52_577001B891185939, //   85
    0xCDE6FD5E09ABCF26_ED4C0226B55E6F87, //   86
    0x80B05E5AC60B6178_544F8158315B05B5, //   87
    0xA0DC75F1778E39D6_696361AE3DB1C722, //   88
    0xC913936DD571C84C_03BC3A19CD1E38EA, //   89
    0xFB5878494ACE3A5F_04AB48A04065C724, //   90
    0x9D174B2DCEC0E47B_62EB0D64283F9C77, //   91
    0xC45D1DF942711D9A_3BA5D0BD324F8395, //   92
    0xF5746577930D6500_CA8F44EC7EE3647A, //   93
    0x9968BF6ABBE85F20_7E998B13CF4E1ECC, //   94
    0xBFC2EF456AE276E8_9E3FEDD8C321A67F, //   95
    0xEFB3AB16C59B14A2_C5CFE94EF3EA101F, //   96
    0x95D04AEE3B80ECE5_BBA1F1D158724A13, //   97
    0xBB445DA9CA61281F_2A8A6E45AE8EDC98, //   98
    0xEA1575143CF97226_F52D09D71A3293BE, //   99
    0x924D692CA61BE758_593C2626705F9C57, //  100
    0xB6E0C377CFA2E12E_6F8B2FB00C77836D, //  101
    0xE498F455C38B997A_0B6DFB9C0F956448, //  102
    0x8EDF98B59A373FEC_4724BD4189BD5EAD, //  103
    0xB2977EE300C50FE7_58EDEC91EC2CB658, //  104
    0xDF3D5E9BC0F653E1_2F2967B66737E3EE, //  105
    0x8B865B215899F46C_BD79E0D20082EE75, //  106
    0xAE67F1E9AEC07187_ECD8590680A3AA12, //  107
    0xDA01EE641A708DE9_E80E6F4820CC9496, //  108
    0x884134FE908658B2_3109058D147FDCDE, //  109
    0xAA51823E34A7EEDE_BD4B46F0599FD416, //  110
    0xD4E5E2CDC1D1EA96_6C9E18AC7007C91B, //  111
    0x850FADC09923329E_03E2CF6BC604DDB1, //  112
    0xA6539930BF6BFF45_84DB8346B786151D, //  113
    0xCFE87F7CEF46FF16_E612641865679A64, //  114
    0x81F14FAE158C5F6E_4FCB7E8F3F60C07F, //  115
    0xA26DA3999AEF7749_E3BE5E330F38F09E, //  116
    0xCB090C8001AB551C_5CADF5BFD3072CC6, //  117
    0xFDCB4FA002162A63_73D9732FC7C8F7F7, //  118
    0x9E9F11C4014DDA7E_2867E7FDDCDD9AFB, //  119
    0xC646D63501A1511D_B281E1FD541501B9, //  120
    0xF7D88BC24209A565_1F225A7CA91A4227, //  121
    0x9AE757596946075F_3375788DE9B06959, //  122
    0xC1A12D2FC3978937_0052D6B1641C83AF, //  123
    0xF209787BB47D6B84_C0678C5DBD23A49B, //  124
    0x9745EB4D50CE6332_F840B7BA963646E1, //  125
    0xBD176620A501FBFF_B650E5A93BC3D899, //  126
    0xEC5D3FA8CE427AFF_A3E51F138AB4CEBF, //  127
    0x93BA47C980E98CDF_C66F336C36B10138, //  128
    0xB8A8D9BBE123F017_B80B0047445D4185, //  129
    0xE6D3102AD96CEC1D_A60DC059157491E6, //  130
    0x9043EA1AC7E41392_87C89837AD68DB30, //  131
    0xB454E4A179DD1877_29BABE4598C311FC, //  132
    0xE16A1DC9D8545E94_F4296DD6FEF3D67B, //  133
    0x8CE2529E2734BB1D_1899E4A65F58660D, //  134
    0xB01AE745B101E9E4_5EC05DCFF72E7F90, //  135
    0xDC21A1171D42645D_76707543F4FA1F74, //  136
    0x899504AE72497EBA_6A06494A791C53A9, //  137
    0xABFA45DA0EDBDE69_0487DB9D17636893, //  138
    0xD6F8D7509292D603_45A9D2845D3C42B7, //  139
    0x865B86925B9BC5C2_0B8A2392BA45A9B3, //  140
    0xA7F26836F282B732_8E6CAC7768D7141F, //  141
    0xD1EF0244AF2364FF_3207D795430CD927, //  142
    0x8335616AED761F1F_7F44E6BD49E807B9, //  143
    0xA402B9C5A8D3A6E7_5F16206C9C6209A7, //  144
    0xCD036837130890A1_36DBA887C37A8C10, //  145
    0x802221226BE55A64_C2494954DA2C978A, //  146
    0xA02AA96B06DEB0FD_F2DB9BAA10B7BD6D, //  147
    0xC83553C5C8965D3D_6F92829494E5ACC8, //  148
    0xFA42A8B73ABBF48C_CB772339BA1F17FA, //  149
    0x9C69A97284B578D7_FF2A760414536EFC, //  150
    0xC38413CF25E2D70D_FEF5138519684ABB, //  151
    0xF46518C2EF5B8CD1_7EB258665FC25D6A, //  152
    0x98BF2F79D5993802_EF2F773FFBD97A62, //  153
    0xBEEEFB584AFF8603_AAFB550FFACFD8FB, //  154
    0xEEAABA2E5DBF6784_95BA2A53F983CF39, //  155
    0x952AB45CFA97A0B2_DD945A747BF26184, //  156
    0xBA756174393D88DF_94F971119AEEF9E5, //  157
    0xE912B9D1478CEB17_7A37CD5601AAB85E, //  158
    0x91ABB422CCB812EE_AC62E055C10AB33B, //  159
    0xB616A12B7FE617AA_577B986B314D600A, //  160
    0xE39C49765FDF9D94_ED5A7E85FDA0B80C, //  161
    0x8E41ADE9FBEBC27D_14588F13BE847308, //  162
    0xB1D219647AE6B31C_596EB2D8AE258FC9, //  163
    0xDE469FBD99A05FE3_6FCA5F8ED9AEF3BC, //  164
    0x8AEC23D680043BEE_25DE7BB9480D5855, //  165
    0xADA72CCC20054AE9_AF561AA79A10AE6B, //  166
    0xD910F7FF28069DA4_1B2BA1518094DA05, //  167
    0x87AA9AFF79042286_90FB44D2F05D0843, //  168
    0xA99541BF57452B28_353A1607AC744A54, //  169
    0xD3FA922F2D1675F2_42889B8997915CE9, //  170
    0x847C9B5D7C2E09B7_69956135FEBADA12, //  171
    0xA59BC234DB398C25_43FAB9837E699096, //  172
    0xCF02B2C21207EF2E_94F967E45E03F4BC, //  173
    0x8161AFB94B44F57D_1D1BE0EEBAC278F6, //  174
    0xA1BA1BA79E1632DC_6462D92A69731733, //  175
    0xCA28A291859BBF93_7D7B8F7503CFDCFF, //  176
    0xFCB2CB35E702AF78_5CDA735244C3D43F, //  177
    0x9DEFBF01B061ADAB_3A0888136AFA64A8, //  178
    0xC56BAEC21C7A1916_088AAA1845B8FDD1, //  179
    0xF6C69A72A3989F5B_8AAD549E57273D46, //  180
    0x9A3C2087A63F6399_36AC54E2F678864C, //  181
    0xC0CB28A98FCF3C7F_84576A1BB416A7DE, //  182
    0xF0FDF2D3F3C30B9F_656D44A2A11C51D6, //  183
    0x969EB7C47859E743_9F644AE5A4B1B326, //  184
    0xBC4665B596706114_873D5D9F0DDE1FEF, //  185
    0xEB57FF22FC0C7959_A90CB506D155A7EB, //  186
    0x9316FF75DD87CBD8_09A7F12442D588F3, //  187
    0xB7DCBF5354E9BECE_0C11ED6D538AEB30, //  188
    0xE5D3EF282A242E81_8F1668C8A86DA5FB, //  189
    0x8FA475791A569D10_F96E017D694487BD, //  190
    0xB38D92D760EC4455_37C981DCC395A9AD, //  191
    0xE070F78D3927556A_85BBE253F47B1418, //  192
    0x8C469AB843B89562_93956D7478CCEC8F, //  193
    0xAF58416654A6BABB_387AC8D1970027B3, //  194
    0xDB2E51BFE9D0696A_06997B05FCC0319F, //  195
    0x88FCF317F22241E2_441FECE3BDF81F04, //  196
    0xAB3C2FDDEEAAD25A_D527E81CAD7626C4, //  197
    0xD60B3BD56A5586F1_8A71E223D8D3B075, //  198
    0x85C7056562757456_F6872D5667844E4A, //  199
    0xA738C6BEBB12D16C_B428F8AC016561DC, //  200
    0xD106F86E69D785C7_E13336D701BEBA53, //  201
    0x82A45B450226B39C_ECC0024661173474, //  202
    0xA34D721642B06084_27F002D7F95D0191, //  203
    0xCC20CE9BD35C78A5_31EC038DF7B441F5, //  204
    0xFF290242C83396CE_7E67047175A15272, //  205
    0x9F79A169BD203E41_0F0062C6E984D387, //  206
    0xC75809C42C684DD1_52C07B78A3E60869, //  207
    0xF92E0C3537826145_A7709A56CCDF8A83, //  208
    0x9BBCC7A142B17CCB_88A66076400BB692, //  209
    0xC2ABF989935DDBFE_6ACFF893D00EA436, //  210
    0xF356F7EBF83552FE_0583F6B8C4124D44, //  211
    0x98165AF37B2153DE_C3727A337A8B704B, //  212
    0xBE1BF1B059E9A8D6_744F18C0592E4C5D, //  213
    0xEDA2EE1C7064130C_1162DEF06F79DF74, //  214
    0x9485D4D1C63E8BE7_8ADDCB5645AC2BA9, //  215
    0xB9A74A0637CE2EE1_6D953E2BD7173693, //  216
    0xE8111C87C5C1BA99_C8FA8DB6CCDD0438, //  217
    0x910AB1D4DB9914A0_1D9C9892400A22A3, //  218
    0xB54D5E4A127F59C8_2503BEB6D00CAB4C, //  219
    0xE2A0B5DC971F303A_2E44AE64840FD61E, //  220
    0x8DA471A9DE737E24_5CEAECFED289E5D3, //  221
    0xB10D8E1456105DAD_7425A83E872C5F48, //  222
    0xDD50F1996B947518_D12F124E28F7771A, //  223
    0x8A5296FFE33CC92F_82BD6B70D99AAA70, //  224
    0xACE73CBFDC0BFB7B_636CC64D1001550C, //  225
    0xD8210BEFD30EFA5A_3C47F7E05401AA4F, //  226
    0x8714A775E3E95C78_65ACFAEC34810A72, //  227
    0xA8D9D1535CE3B396_7F1839A741A14D0E, //  228
    0xD31045A8341CA07C_1EDE48111209A051, //  229
    0x83EA2B892091E44D_934AED0AAB460433, //  230
    0xA4E4B66B68B65D60_F81DA84D56178540, //  231
    0xCE1DE40642E3F4B9_36251260AB9D668F, //  232
    0x80D2AE83E9CE78F3_C1D72B7C6B42601A, //  233
    0xA1075A24E4421730_B24CF65B8612F820, //  234
    0xC94930AE1D529CFC_DEE033F26797B628, //  235
    0xFB9B7CD9A4A7443C_169840EF017DA3B2, //  236
    0x9D412E0806E88AA5_8E1F289560EE864F, //  237
    0xC491798A08A2AD4E_F1A6F2BAB92A27E3, //  238
    0xF5B5D7EC8ACB58A2_AE10AF696774B1DC, //  239
    0x9991A6F3D6BF1765_ACCA6DA1E0A8EF2A, //  240
    0xBFF610B0CC6EDD3F_17FD090A58D32AF4, //  241
    0xEFF394DCFF8A948E_DDFC4B4CEF07F5B1, //  242
    0x95F83D0A1FB69CD9_4ABDAF101564F98F, //  243
    0xBB764C4CA7A4440F_9D6D1AD41ABE37F2, //  244
    0xEA53DF5FD18D5513_84C86189216DC5EE, //  245
    0x92746B9BE2F8552C_32FD3CF5B4E49BB5, //  246
    0xB7118682DBB66A77_3FBC8C33221DC2A2, //  247
    0xE4D5E82392A40515_0FABAF3FEAA5334B, //  248
    0x8F05B1163BA6832D_29CB4D87F2A7400F, //  249
    0xB2C71D5BCA9023F8_743E20E9EF511013, //  250
    0xDF78E4B2BD342CF6_914DA9246B255417, //  251
    0x8BAB8EEFB6409C1A_1AD089B6C2F7548F, //  252
    0xAE9672ABA3D0C320_A184AC2473B529B2, //  253
    0xDA3C0F568CC4F3E8_C9E5D72D90A2741F, //  254
    0x8865899617FB1871_7E2FA67C7A658893, //  255
    0xAA7EEBFB9DF9DE8D_DDBB901B98FEEAB8, //  256
    0xD51EA6FA85785631_552A74227F3EA566, //  257
    0x8533285C936B35DE_D53A88958F872760, //  258
    0xA67FF273B8460356_8A892ABAF368F138, //  259
    0xD01FEF10A657842C_2D2B7569B0432D86, //  260
    0x8213F56A67F6B29B_9C3B29620E29FC74, //  261
    0xA298F2C501F45F42_8349F3BA91B47B90, //  262
    0xCB3F2F7642717713_241C70A936219A74, //  263
    0xFE0EFB53D30DD4D7_ED238CD383AA0111, //  264
    0x9EC95D1463E8A506_F4363804324A40AB, //  265
    0xC67BB4597CE2CE48_B143C6053EDCD0D6, //  266
    0xF81AA16FDC1B81DA_DD94B7868E94050B, //  267
    0x9B10A4E5E9913128_CA7CF2B4191C8327, //  268
    0xC1D4CE1F63F57D72_FD1C2F611F63A3F1, //  269
    0xF24A01A73CF2DCCF_BC633B39673C8CED, //  270
    0x976E41088617CA01_D5BE0503E085D814, //  271
    0xBD49D14AA79DBC82_4B2D8644D8A74E19, //  272
    0xEC9C459D51852BA2_DDF8E7D60ED1219F, //  273
    0x93E1AB8252F33B45_CABB90E5C942B504, //  274
    0xB8DA1662E7B00A17_3D6A751F3B936244, //  275
    0xE7109BFBA19C0C9D_0CC512670A783AD5, //  276
    0x906A617D450187E2_27FB2B80668B24C6, //  277
    0xB484F9DC9641E9DA_B1F9F660802DEDF7, //  278
    0xE1A63853BBD26451_5E7873F8A0396974, //  279
    0x8D07E33455637EB2_DB0B487B6423E1E9, //  280
    0xB049DC016ABC5E5F_91CE1A9A3D2CDA63, //  281
    0xDC5C5301C56B75F7_7641A140CC7810FC, //  282
    0x89B9B3E11B6329BA_A9E904C87FCB0A9E, //  283
    0xAC2820D9623BF429_546345FA9FBDCD45, //  284
    0xD732290FBACAF133_A97C177947AD4096, //  285
    0x867F59A9D4BED6C0_49ED8EABCCCC485E, //  286
    0xA81F301449EE8C70_5C68F256BFFF5A75, //  287
    0xD226FC195C6A2F8C_73832EEC6FFF3112, //  288
    0x83585D8FD9C25DB7_C831FD53C5FF7EAC, //  289
    0xA42E74F3D032F525_BA3E7CA8B77F5E56, //  290
    0xCD3A1230C43FB26F_28CE1BD2E55F35EC, //  291
    0x80444B5E7AA7CF85_7980D163CF5B81B4, //  292
    0xA0555E361951C366_D7E105BCC3326220, //  293
    0xC86AB5C39FA63440_8DD9472BF3FEFAA8, //  294
    0xFA856334878FC150_B14F98F6F0FEB952, //  295
    0x9C935E00D4B9D8D2_6ED1BF9A569F33D4, //  296
    0xC3B8358109E84F07_0A862F80EC4700C9, //  297
    0xF4A642E14C6262C8_CD27BB612758C0FB, //  298
    0x98E7E9CCCFBD7DBD_8038D51CB897789D, //  299
    0xBF21E44003ACDD2C_E0470A63E6BD56C4, //  300
    0xEEEA5D5004981478_1858CCFCE06CAC75, //  301
    0x95527A5202DF0CCB_0F37801E0C43EBC9, //  302
    0xBAA718E68396CFFD_D30560258F54E6BB, //  303
    0xE950DF20247C83FD_47C6B82EF32A206A, //  304
    0x91D28B7416CDD27E_4CDC331D57FA5442, //  305
    0xB6472E511C81471D_E0133FE4ADF8E953, //  306
    0xE3D8F9E563A198E5_58180FDDD97723A7, //  307
    0x8E679C2F5E44FF8F_570F09EAA7EA7649, //  308
    0xB201833B35D63F73_2CD2CC6551E513DB, //  309
    0xDE81E40A034BCF4F_F8077F7EA65E58D2, //  310
    0x8B112E86420F6191_FB04AFAF27FAF783, //  311
    0xADD57A27D29339F6_79C5DB9AF1F9B564, //  312
    0xD94AD8B1C7380874_18375281AE7822BD, //  313
    0x87CEC76F1C830548_8F2293910D0B15B6, //  314
    0xA9C2794AE3A3C69A_B2EB3875504DDB23, //  315
    0xD433179D9C8CB841_5FA60692A46151EC, //  316
    0x849FEEC281D7F328_DBC7C41BA6BCD334, //  317
    0xA5C7EA73224DEFF3_12B9B522906C0801, //  318
    0xCF39E50FEAE16BEF_D768226B34870A01, //  319
    0x81842F29F2CCE375_E6A1158300D46641, //  320
    0xA1E53AF46F801C53_60495AE3C1097FD1, //  321
    0xCA5E89B18B602368_385BB19CB14BDFC5, //  322
    0xFCF62C1DEE382C42_46729E03DD9ED7B6, //  323
    0x9E19DB92B4E31BA9_6C07A2C26A8346D2, //  324
    0xC5A05277621BE293_C7098B7305241886, //  325
    0xF70867153AA2DB38_B8CBEE4FC66D1EA8, //  326
    0x9A65406D44A5C903_737F74F1DC043329, //  327
    0xC0FE908895CF3B44_505F522E53053FF3, //  328
    0xF13E34AABB430A15_647726B9E7C68FF0, //  329
    0x96C6E0EAB509E64D_5ECA783430DC19F6, //  330
    0xBC789925624C5FE0_B67D16413D132073, //  331
    0xEB96BF6EBADF77D8_E41C5BD18C57E890, //  332
    0x933E37A534CBAAE7_8E91B962F7B6F15A, //  333
    0xB80DC58E81FE95A1_723627BBB5A4ADB1, //  334
    0xE61136F2227E3B09_CEC3B1AAA30DD91D, //  335
    0x8FCAC257558EE4E6_213A4F0AA5E8A7B2, //  336
    0xB3BD72ED2AF29E1F_A988E2CD4F62D19E, //  337
    0xE0ACCFA875AF45A7_93EB1B80A33B8606, //  338
    0x8C6C01C9498D8B88_BC72F130660533C4, //  339
    0xAF87023B9BF0EE6A_EB8FAD7C7F8680B5, //  340
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_entries() {
        // Exact powers of ten normalize with no ceiling adjustment.
        assert_eq!(pow10_32(0), 0x8000_0000_0000_0000);
        assert_eq!(pow10_32(1), 0xA000_0000_0000_0000);
        assert_eq!(pow10_64(0), 0x8000_0000_0000_0000_0000_0000_0000_0000);
        // 1/10 is inexact; the ceiling shows in the last digit.
        assert_eq!(pow10_32(-1), 0xCCCC_CCCC_CCCC_CCCD);
        assert_eq!(
            pow10_64(-1),
            0xCCCC_CCCC_CCCC_CCCC_CCCC_CCCC_CCCC_CCCD
        );
    }

    #[test]
    fn every_entry_is_normalized() {
        for k in POW10_32_MIN..=POW10_32_MAX {
            assert!(pow10_32(k) >= 1u64 << 63, "k={}", k);
        }
        for k in POW10_64_MIN..=POW10_64_MAX {
            assert!(pow10_64(k) >= 1u128 << 127, "k={}", k);
        }
    }
}

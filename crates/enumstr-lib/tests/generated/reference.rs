// Code generated by "enumstr reference"; DO NOT EDIT.

const DAY_NAME: &str = "MondayTuesdayWednesdayThursdayFridaySaturdaySunday";
const DAY_INDEX: [u8; 8] = [0, 6, 13, 22, 30, 36, 44, 50];

pub fn day_name(i: i64) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        0..=6 => {
            let idx = i as usize;
            Cow::Borrowed(&DAY_NAME[DAY_INDEX[idx] as usize..DAY_INDEX[idx + 1] as usize])
        }
        _ => Cow::Owned(format!("Day({i})")),
    }
}

impl ::std::fmt::Display for Day {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&day_name(self.0))
    }
}

const NUMBER_NAME: &str = "OneTwoThree";
const NUMBER_INDEX: [u8; 4] = [0, 3, 6, 11];

pub fn number_name(i: i64) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        1..=3 => {
            let idx = (i - 1) as usize;
            Cow::Borrowed(&NUMBER_NAME[NUMBER_INDEX[idx] as usize..NUMBER_INDEX[idx + 1] as usize])
        }
        _ => Cow::Owned(format!("Number({i})")),
    }
}

impl ::std::fmt::Display for Number {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&number_name(self.0))
    }
}

const GAP_NAME_0: &str = "TwoThree";
const GAP_NAME_1: &str = "FiveSixSevenEightNine";
const GAP_NAME_2: &str = "Eleven";
const GAP_INDEX_0: [u8; 3] = [0, 3, 8];
const GAP_INDEX_1: [u8; 6] = [0, 4, 7, 12, 17, 21];

pub fn gap_name(i: i64) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        2..=3 => {
            let idx = (i - 2) as usize;
            Cow::Borrowed(&GAP_NAME_0[GAP_INDEX_0[idx] as usize..GAP_INDEX_0[idx + 1] as usize])
        }
        5..=9 => {
            let idx = (i - 5) as usize;
            Cow::Borrowed(&GAP_NAME_1[GAP_INDEX_1[idx] as usize..GAP_INDEX_1[idx + 1] as usize])
        }
        11 => Cow::Borrowed(GAP_NAME_2),
        _ => Cow::Owned(format!("Gap({i})")),
    }
}

impl ::std::fmt::Display for Gap {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&gap_name(self.0))
    }
}

const NUM_NAME: &str = "m_2m_1m0m1m2";
const NUM_INDEX: [u8; 6] = [0, 3, 6, 8, 10, 12];

pub fn num_name(i: i64) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        -2..=2 => {
            let idx = i.wrapping_sub(-2) as u64 as usize;
            Cow::Borrowed(&NUM_NAME[NUM_INDEX[idx] as usize..NUM_INDEX[idx + 1] as usize])
        }
        _ => Cow::Owned(format!("Num({i})")),
    }
}

impl ::std::fmt::Display for Num {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&num_name(self.0))
    }
}

const UNUM_NAME_0: &str = "m0m1m2";
const UNUM_NAME_1: &str = "m_2m_1";
const UNUM_INDEX_0: [u8; 4] = [0, 2, 4, 6];
const UNUM_INDEX_1: [u8; 3] = [0, 3, 6];

pub fn unum_name(i: u8) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        0..=2 => {
            let idx = i as usize;
            Cow::Borrowed(&UNUM_NAME_0[UNUM_INDEX_0[idx] as usize..UNUM_INDEX_0[idx + 1] as usize])
        }
        253..=254 => {
            let idx = (i - 253) as usize;
            Cow::Borrowed(&UNUM_NAME_1[UNUM_INDEX_1[idx] as usize..UNUM_INDEX_1[idx + 1] as usize])
        }
        _ => Cow::Owned(format!("Unum({i})")),
    }
}

impl ::std::fmt::Display for Unum {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&unum_name(self.0))
    }
}

static PRIME_MAP: [(i64, &str); 13] = [
    (2, "p2"),
    (3, "p3"),
    (5, "p5"),
    (7, "p7"),
    (11, "p11"),
    (13, "p13"),
    (17, "p17"),
    (19, "p19"),
    (23, "p23"),
    (29, "p29"),
    (31, "p37"),
    (41, "p41"),
    (43, "p43"),
];

pub fn prime_name(i: i64) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match PRIME_MAP.binary_search_by_key(&i, |&(value, _)| value) {
        Ok(pos) => Cow::Borrowed(PRIME_MAP[pos].1),
        Err(_) => Cow::Owned(format!("Prime({i})")),
    }
}

impl ::std::fmt::Display for Prime {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&prime_name(self.0))
    }
}

const EDGE_NAME: &str = "LowestNext";
const EDGE_INDEX: [u8; 3] = [0, 6, 10];

pub fn edge_name(i: i64) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        i64::MIN..=-9223372036854775807 => {
            let idx = i.wrapping_sub(i64::MIN) as u64 as usize;
            Cow::Borrowed(&EDGE_NAME[EDGE_INDEX[idx] as usize..EDGE_INDEX[idx + 1] as usize])
        }
        _ => Cow::Owned(format!("Edge({i})")),
    }
}

impl ::std::fmt::Display for Edge {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&edge_name(self.0))
    }
}

const WIDE_NAME_0: &str = "Zero";
const WIDE_NAME_1: &str = "NearMaxMax";
const WIDE_INDEX_1: [u8; 3] = [0, 7, 10];

pub fn wide_name(i: u64) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        0 => Cow::Borrowed(WIDE_NAME_0),
        18446744073709551614..=18446744073709551615 => {
            let idx = (i - 18446744073709551614) as usize;
            Cow::Borrowed(&WIDE_NAME_1[WIDE_INDEX_1[idx] as usize..WIDE_INDEX_1[idx + 1] as usize])
        }
        _ => Cow::Owned(format!("Wide({i})")),
    }
}

impl ::std::fmt::Display for Wide {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&wide_name(self.0))
    }
}

const TINY_NAME: &str = "v0v1v2v3v4v5v6v7v8v9v10v11v12v13v14v15v16v17v18v19v20v21v22v23v24v25v26v27v28v29v30v31v32v33v34v35v36v37v38v39v40v41v42v43v44v45v46v47v48v49v50v51v52v53v54v55v56v57v58v59v60v61v62v63v64v65v66v67v68v69v70v71v72v73v74v75v76v77v78v79v80v81v82v83v84v85v86v87v88v89v90v91v92v93v94v95v96v97v98v99v100v101v102v103v104v105v106v107v108v109v110v111v112v113v114v115v116v117v118v119v120v121v122v123v124v125v126v127v128v129v130v131v132v133v134v135v136v137v138v139v140v141v142v143v144v145v146v147v148v149v150v151v152v153v154v155v156v157v158v159v160v161v162v163v164v165v166v167v168v169v170v171v172v173v174v175v176v177v178v179v180v181v182v183v184v185v186v187v188v189v190v191v192v193v194v195v196v197v198v199v200v201v202v203v204v205v206v207v208v209v210v211v212v213v214v215v216v217v218v219v220v221v222v223v224v225v226v227v228v229v230v231v232v233v234v235v236v237v238v239v240v241v242v243v244v245v246v247v248v249v250v251v252v253v254v255";
const TINY_INDEX: [u16; 257] = [0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 23, 26, 29, 32, 35, 38, 41, 44, 47, 50, 53, 56, 59, 62, 65, 68, 71, 74, 77, 80, 83, 86, 89, 92, 95, 98, 101, 104, 107, 110, 113, 116, 119, 122, 125, 128, 131, 134, 137, 140, 143, 146, 149, 152, 155, 158, 161, 164, 167, 170, 173, 176, 179, 182, 185, 188, 191, 194, 197, 200, 203, 206, 209, 212, 215, 218, 221, 224, 227, 230, 233, 236, 239, 242, 245, 248, 251, 254, 257, 260, 263, 266, 269, 272, 275, 278, 281, 284, 287, 290, 294, 298, 302, 306, 310, 314, 318, 322, 326, 330, 334, 338, 342, 346, 350, 354, 358, 362, 366, 370, 374, 378, 382, 386, 390, 394, 398, 402, 406, 410, 414, 418, 422, 426, 430, 434, 438, 442, 446, 450, 454, 458, 462, 466, 470, 474, 478, 482, 486, 490, 494, 498, 502, 506, 510, 514, 518, 522, 526, 530, 534, 538, 542, 546, 550, 554, 558, 562, 566, 570, 574, 578, 582, 586, 590, 594, 598, 602, 606, 610, 614, 618, 622, 626, 630, 634, 638, 642, 646, 650, 654, 658, 662, 666, 670, 674, 678, 682, 686, 690, 694, 698, 702, 706, 710, 714, 718, 722, 726, 730, 734, 738, 742, 746, 750, 754, 758, 762, 766, 770, 774, 778, 782, 786, 790, 794, 798, 802, 806, 810, 814, 818, 822, 826, 830, 834, 838, 842, 846, 850, 854, 858, 862, 866, 870, 874, 878, 882, 886, 890, 894, 898, 902, 906, 910, 914];

pub fn tiny_name(i: i8) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        i8::MIN..=127 => {
            let idx = i.wrapping_sub(i8::MIN) as u8 as usize;
            Cow::Borrowed(&TINY_NAME[TINY_INDEX[idx] as usize..TINY_INDEX[idx + 1] as usize])
        }
    }
}

impl ::std::fmt::Display for Tiny {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&tiny_name(self.0))
    }
}

const QUOTE_NAME: &str = "say \"hi\"a\\bPlain";
const QUOTE_INDEX: [u8; 4] = [0, 8, 11, 16];

pub fn quote_name(i: u16) -> ::std::borrow::Cow<'static, str> {
    use ::std::borrow::Cow;
    match i {
        0..=2 => {
            let idx = i as usize;
            Cow::Borrowed(&QUOTE_NAME[QUOTE_INDEX[idx] as usize..QUOTE_INDEX[idx + 1] as usize])
        }
        _ => Cow::Owned(format!("Quote({i})")),
    }
}

impl ::std::fmt::Display for Quote {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&quote_name(self.0))
    }
}

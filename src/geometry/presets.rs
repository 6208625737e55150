//! Preset shape catalog.
//!
//! Each entry is a compact template: `av name value` adjustment defaults,
//! `gd name formula` guides, `path [w=..] [h=..] [fill=..] [stroke=false]`
//! starting a path, then `M x y`, `L x y`, `A wR hR stAng swAng`,
//! `Q x1 y1 x2 y2`, `C x1 y1 x2 y2 x3 y3` and `Z`. Statements are separated
//! by newlines or `;`. Templates are parsed once on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{Geometry, Guide, Path, PathFill, Point, Segment};

const PRESETS: &[(&str, &str)] = &[
    ("rect", "M l t; L r t; L r b; L l b; Z"),
    (
        "roundRect",
        "av adj 16667
         gd a pin 0 adj 50000
         gd x1 */ ss a 100000
         gd x2 +- r 0 x1
         gd y2 +- b 0 x1
         M l x1; A x1 x1 cd2 cd4; L x2 t; A x1 x1 3cd4 cd4; L r y2; A x1 x1 0 cd4; L x1 b; A x1 x1 cd4 cd4; Z",
    ),
    (
        "ellipse",
        "M l vc; A wd2 hd2 cd2 cd4; A wd2 hd2 3cd4 cd4; A wd2 hd2 0 cd4; A wd2 hd2 cd4 cd4; Z",
    ),
    (
        "flowChartConnector",
        "M l vc; A wd2 hd2 cd2 cd4; A wd2 hd2 3cd4 cd4; A wd2 hd2 0 cd4; A wd2 hd2 cd4 cd4; Z",
    ),
    (
        "triangle",
        "av adj 50000
         gd a pin 0 adj 100000
         gd x1 */ w a 100000
         M l b; L x1 t; L r b; Z",
    ),
    ("rtTriangle", "M l b; L l t; L r b; Z"),
    ("diamond", "M l vc; L hc t; L r vc; L hc b; Z"),
    (
        "parallelogram",
        "av adj 25000
         gd maxAdj */ 100000 w ss
         gd a pin 0 adj maxAdj
         gd x2 */ ss a 100000
         gd x6 +- r 0 x2
         M l b; L x2 t; L r t; L x6 b; Z",
    ),
    (
        "trapezoid",
        "av adj 25000
         gd maxAdj */ 50000 w ss
         gd a pin 0 adj maxAdj
         gd x2 */ ss a 100000
         gd x3 +- r 0 x2
         M l b; L x2 t; L x3 t; L r b; Z",
    ),
    (
        "pentagon",
        "av hf 105146; av vf 110557
         gd swd2 */ wd2 hf 100000
         gd shd2 */ hd2 vf 100000
         gd svc */ vc vf 100000
         gd dx1 cos swd2 1080000
         gd dx2 cos swd2 18360000
         gd dy1 sin shd2 1080000
         gd dy2 sin shd2 18360000
         gd x1 +- hc 0 dx1
         gd x2 +- hc 0 dx2
         gd x3 +- hc dx2 0
         gd x4 +- hc dx1 0
         gd y1 +- svc 0 dy1
         gd y2 +- svc 0 dy2
         M x1 y1; L hc t; L x4 y1; L x3 y2; L x2 y2; Z",
    ),
    (
        "hexagon",
        "av adj 25000; av vf 115470
         gd maxAdj */ 50000 w ss
         gd a pin 0 adj maxAdj
         gd shd2 */ hd2 vf 100000
         gd x1 */ ss a 100000
         gd x2 +- r 0 x1
         gd dy1 sin shd2 3600000
         gd y1 +- vc 0 dy1
         gd y2 +- vc dy1 0
         M l vc; L x1 y1; L x2 y1; L r vc; L x2 y2; L x1 y2; Z",
    ),
    (
        "heptagon",
        "av hf 102572; av vf 105210
         gd swd2 */ wd2 hf 100000
         gd shd2 */ hd2 vf 100000
         gd svc */ vc vf 100000
         gd dx1 */ swd2 97493 100000
         gd dx2 */ swd2 78183 100000
         gd dx3 */ swd2 43388 100000
         gd dy1 */ shd2 62349 100000
         gd dy2 */ shd2 22252 100000
         gd dy3 */ shd2 90097 100000
         gd x1 +- hc 0 dx1
         gd x2 +- hc 0 dx2
         gd x3 +- hc 0 dx3
         gd x4 +- hc dx3 0
         gd x5 +- hc dx2 0
         gd x6 +- hc dx1 0
         gd y1 +- svc 0 dy1
         gd y2 +- svc dy2 0
         gd y3 +- svc dy3 0
         M x1 y2; L x2 y1; L hc t; L x5 y1; L x6 y2; L x4 y3; L x3 y3; Z",
    ),
    (
        "octagon",
        "av adj 29289
         gd a pin 0 adj 50000
         gd x1 */ ss a 100000
         gd x2 +- r 0 x1
         gd y2 +- b 0 x1
         M l x1; L x1 t; L x2 t; L r x1; L r y2; L x2 b; L x1 b; L l y2; Z",
    ),
    (
        "plus",
        "av adj 25000
         gd a pin 0 adj 50000
         gd x1 */ ss a 100000
         gd x2 +- r 0 x1
         gd y2 +- b 0 x1
         M l x1; L x1 x1; L x1 t; L x2 t; L x2 x1; L r x1; L r y2; L x2 y2; L x2 b; L x1 b; L x1 y2; L l y2; Z",
    ),
    (
        "star4",
        "av adj 12500
         gd a pin 0 adj 50000
         gd iwd2 */ wd2 a 50000
         gd ihd2 */ hd2 a 50000
         gd sdx cos iwd2 2700000
         gd sdy sin ihd2 2700000
         gd sx1 +- hc 0 sdx
         gd sx2 +- hc sdx 0
         gd sy1 +- vc 0 sdy
         gd sy2 +- vc sdy 0
         M l vc; L sx1 sy1; L hc t; L sx2 sy1; L r vc; L sx2 sy2; L hc b; L sx1 sy2; Z",
    ),
    (
        "star5",
        "av adj 19098; av hf 105146; av vf 110557
         gd a pin 0 adj 50000
         gd swd2 */ wd2 hf 100000
         gd shd2 */ hd2 vf 100000
         gd svc */ vc vf 100000
         gd dx1 cos swd2 1080000
         gd dx2 cos swd2 18360000
         gd dy1 sin shd2 1080000
         gd dy2 sin shd2 18360000
         gd x1 +- hc 0 dx1
         gd x2 +- hc 0 dx2
         gd x3 +- hc dx2 0
         gd x4 +- hc dx1 0
         gd y1 +- svc 0 dy1
         gd y2 +- svc 0 dy2
         gd iwd2 */ swd2 a 50000
         gd ihd2 */ shd2 a 50000
         gd sdx1 cos iwd2 20520000
         gd sdx2 cos iwd2 3240000
         gd sdy1 sin ihd2 3240000
         gd sdy2 sin ihd2 20520000
         gd sx1 +- hc 0 sdx1
         gd sx2 +- hc 0 sdx2
         gd sx3 +- hc sdx2 0
         gd sx4 +- hc sdx1 0
         gd sy1 +- svc 0 sdy1
         gd sy2 +- svc 0 sdy2
         gd sy3 +- svc ihd2 0
         M x1 y1; L sx2 sy1; L hc t; L sx3 sy1; L x4 y1; L sx4 sy2; L x3 y2; L hc sy3; L x2 y2; L sx1 sy2; Z",
    ),
    (
        "star6",
        "av adj 28868; av hf 115470
         gd a pin 0 adj 50000
         gd swd2 */ wd2 hf 100000
         gd dx1 cos swd2 1800000
         gd x1 +- hc 0 dx1
         gd x2 +- hc dx1 0
         gd y2 +- vc hd4 0
         gd iwd2 */ swd2 a 50000
         gd ihd2 */ hd2 a 50000
         gd sdx2 */ iwd2 1 2
         gd sx1 +- hc 0 iwd2
         gd sx2 +- hc 0 sdx2
         gd sx3 +- hc sdx2 0
         gd sx4 +- hc iwd2 0
         gd sdy1 sin ihd2 3600000
         gd sy1 +- vc 0 sdy1
         gd sy2 +- vc sdy1 0
         M x1 hd4; L sx2 sy1; L hc t; L sx3 sy1; L x2 hd4; L sx4 vc; L x2 y2; L sx3 sy2; L hc b; L sx2 sy2; L x1 y2; L sx1 vc; Z",
    ),
    (
        "rightArrow",
        "av adj1 50000; av adj2 50000
         gd maxAdj2 */ 100000 w ss
         gd a1 pin 0 adj1 100000
         gd a2 pin 0 adj2 maxAdj2
         gd dx1 */ ss a2 100000
         gd x1 +- r 0 dx1
         gd dy1 */ h a1 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc dy1 0
         M l y1; L x1 y1; L x1 t; L r vc; L x1 b; L x1 y2; L l y2; Z",
    ),
    (
        "leftArrow",
        "av adj1 50000; av adj2 50000
         gd maxAdj2 */ 100000 w ss
         gd a1 pin 0 adj1 100000
         gd a2 pin 0 adj2 maxAdj2
         gd x2 */ ss a2 100000
         gd dy1 */ h a1 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc dy1 0
         M l vc; L x2 t; L x2 y1; L r y1; L r y2; L x2 y2; L x2 b; Z",
    ),
    (
        "upArrow",
        "av adj1 50000; av adj2 50000
         gd maxAdj2 */ 100000 h ss
         gd a1 pin 0 adj1 100000
         gd a2 pin 0 adj2 maxAdj2
         gd y2 */ ss a2 100000
         gd dx1 */ w a1 200000
         gd x1 +- hc 0 dx1
         gd x2 +- hc dx1 0
         M l y2; L hc t; L r y2; L x2 y2; L x2 b; L x1 b; L x1 y2; Z",
    ),
    (
        "downArrow",
        "av adj1 50000; av adj2 50000
         gd maxAdj2 */ 100000 h ss
         gd a1 pin 0 adj1 100000
         gd a2 pin 0 adj2 maxAdj2
         gd dy1 */ ss a2 100000
         gd y1 +- b 0 dy1
         gd dx1 */ w a1 200000
         gd x1 +- hc 0 dx1
         gd x2 +- hc dx1 0
         M x1 t; L x2 t; L x2 y1; L r y1; L hc b; L l y1; L x1 y1; Z",
    ),
    (
        "leftRightArrow",
        "av adj1 50000; av adj2 50000
         gd maxAdj2 */ 50000 w ss
         gd a1 pin 0 adj1 100000
         gd a2 pin 0 adj2 maxAdj2
         gd x2 */ ss a2 100000
         gd x3 +- r 0 x2
         gd dy */ h a1 200000
         gd y1 +- vc 0 dy
         gd y2 +- vc dy 0
         M l vc; L x2 t; L x2 y1; L x3 y1; L x3 t; L r vc; L x3 b; L x3 y2; L x2 y2; L x2 b; Z",
    ),
    (
        "upDownArrow",
        "av adj1 50000; av adj2 50000
         gd maxAdj2 */ 50000 h ss
         gd a1 pin 0 adj1 100000
         gd a2 pin 0 adj2 maxAdj2
         gd y2 */ ss a2 100000
         gd y3 +- b 0 y2
         gd dx1 */ w a1 200000
         gd x1 +- hc 0 dx1
         gd x2 +- hc dx1 0
         M l y2; L hc t; L r y2; L x2 y2; L x2 y3; L r y3; L hc b; L l y3; L x1 y3; L x1 y2; Z",
    ),
    (
        "notchedRightArrow",
        "av adj1 50000; av adj2 50000
         gd maxAdj2 */ 100000 w ss
         gd a1 pin 0 adj1 100000
         gd a2 pin 0 adj2 maxAdj2
         gd dx2 */ ss a2 100000
         gd x2 +- r 0 dx2
         gd dy1 */ h a1 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc dy1 0
         gd x1 */ dy1 dx2 hd2
         M l y1; L x2 y1; L x2 t; L r vc; L x2 b; L x2 y2; L l y2; L x1 vc; Z",
    ),
    (
        "bentArrow",
        "av adj1 25000; av adj2 25000; av adj3 25000; av adj4 43750
         gd a2 pin 0 adj2 50000
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd a3 pin 0 adj3 50000
         gd th */ ss a1 100000
         gd aw2 */ ss a2 100000
         gd th2 */ th 1 2
         gd dh2 +- aw2 0 th2
         gd ah */ ss a3 100000
         gd bw +- r 0 ah
         gd bh +- b 0 dh2
         gd bs min bw bh
         gd maxAdj4 */ 100000 bs ss
         gd a4 pin 0 adj4 maxAdj4
         gd bd */ ss a4 100000
         gd bd3 +- bd 0 th
         gd bd2 max bd3 0
         gd x3 +- th bd2 0
         gd x4 +- r 0 ah
         gd y3 +- dh2 th 0
         gd y4 +- y3 dh2 0
         gd y5 +- dh2 bd 0
         M l b; L l y5; A bd bd cd2 cd4; L x4 dh2; L x4 t; L r aw2; L x4 y4; L x4 y3; L x3 y3; A bd2 bd2 3cd4 -5400000; L th b; Z",
    ),
    (
        "homePlate",
        "av adj 50000
         gd maxAdj */ 100000 w ss
         gd a pin 0 adj maxAdj
         gd dx1 */ ss a 100000
         gd x1 +- r 0 dx1
         M l t; L x1 t; L r vc; L x1 b; L l b; Z",
    ),
    (
        "chevron",
        "av adj 50000
         gd maxAdj */ 100000 w ss
         gd a pin 0 adj maxAdj
         gd x1 */ ss a 100000
         gd x2 +- r 0 x1
         M l t; L x2 t; L r vc; L x2 b; L l b; L x1 vc; Z",
    ),
    ("line", "path fill=none; M l t; L r b"),
    ("straightConnector1", "path fill=none; M l t; L r b"),
    ("bentConnector2", "path fill=none; M l t; L r t; L r b"),
    (
        "bentConnector3",
        "av adj1 50000
         gd x1 */ w adj1 100000
         path fill=none; M l t; L x1 t; L x1 b; L r b",
    ),
    (
        "curvedConnector3",
        "av adj1 50000
         gd x2 */ w adj1 100000
         gd x1 +/ l x2 2
         gd x3 +/ r x2 2
         gd y3 */ h 3 4
         path fill=none; M l t; C x1 t x2 hd4 x2 vc; C x2 y3 x3 b r b",
    ),
    (
        "snip1Rect",
        "av adj 16667
         gd a pin 0 adj 50000
         gd dx1 */ ss a 100000
         gd x1 +- r 0 dx1
         M l t; L x1 t; L r dx1; L r b; L l b; Z",
    ),
    (
        "snip2SameRect",
        "av adj1 16667; av adj2 0
         gd a1 pin 0 adj1 50000
         gd a2 pin 0 adj2 50000
         gd tx1 */ ss a1 100000
         gd tx2 +- r 0 tx1
         gd bx1 */ ss a2 100000
         gd bx2 +- r 0 bx1
         gd by1 +- b 0 bx1
         M tx1 t; L tx2 t; L r tx1; L r by1; L bx2 b; L bx1 b; L l by1; L l tx1; Z",
    ),
    (
        "round1Rect",
        "av adj 16667
         gd a pin 0 adj 50000
         gd dx1 */ ss a 100000
         gd x1 +- r 0 dx1
         M l t; L x1 t; A dx1 dx1 3cd4 cd4; L r b; L l b; Z",
    ),
    (
        "round2SameRect",
        "av adj1 16667; av adj2 0
         gd a1 pin 0 adj1 50000
         gd a2 pin 0 adj2 50000
         gd tx1 */ ss a1 100000
         gd tx2 +- r 0 tx1
         gd bx1 */ ss a2 100000
         gd bx2 +- r 0 bx1
         gd by1 +- b 0 bx1
         M tx1 t; L tx2 t; A tx1 tx1 3cd4 cd4; L r by1; A bx1 bx1 0 cd4; L bx1 b; A bx1 bx1 cd4 cd4; L l tx1; A tx1 tx1 cd2 cd4; Z",
    ),
    (
        "frame",
        "av adj1 12500
         gd a1 pin 0 adj1 50000
         gd x1 */ ss a1 100000
         gd x4 +- r 0 x1
         gd y4 +- b 0 x1
         M l t; L r t; L r b; L l b; Z; M x1 x1; L x1 y4; L x4 y4; L x4 x1; Z",
    ),
    (
        "donut",
        "av adj 25000
         gd a pin 0 adj 50000
         gd dr */ ss a 100000
         gd iwd2 +- wd2 0 dr
         gd ihd2 +- hd2 0 dr
         M l vc; A wd2 hd2 cd2 cd4; A wd2 hd2 3cd4 cd4; A wd2 hd2 0 cd4; A wd2 hd2 cd4 cd4; Z
         M dr vc; A iwd2 ihd2 cd2 -5400000; A iwd2 ihd2 cd4 -5400000; A iwd2 ihd2 0 -5400000; A iwd2 ihd2 3cd4 -5400000; Z",
    ),
    (
        "can",
        "av adj 25000
         gd maxAdj */ 50000 h ss
         gd a pin 0 adj maxAdj
         gd y1 */ ss a 200000
         gd y3 +- b 0 y1
         path stroke=false; M l y1; A wd2 y1 cd2 -10800000; L r y3; A wd2 y1 0 cd2; Z
         path fill=lighten stroke=false; M l y1; A wd2 y1 cd2 cd2; A wd2 y1 0 cd2; Z
         path fill=none; M r y1; A wd2 y1 0 cd2; A wd2 y1 cd2 cd2; L r y3; A wd2 y1 0 cd2; L l y1",
    ),
    (
        "cube",
        "av adj 25000
         gd a pin 0 adj 100000
         gd y1 */ ss a 100000
         gd y4 +- b 0 y1
         gd x4 +- r 0 y1
         path stroke=false; M l y1; L x4 y1; L x4 b; L l b; Z
         path fill=darkenLess stroke=false; M x4 y1; L r t; L r y4; L x4 b; Z
         path fill=lightenLess stroke=false; M l y1; L y1 t; L r t; L x4 y1; Z
         path fill=none; M l y1; L y1 t; L r t; L r y4; L x4 b; L l b; Z; M l y1; L x4 y1; L r t; M x4 y1; L x4 b",
    ),
    (
        "plaque",
        "av adj 16667
         gd a pin 0 adj 50000
         gd x1 */ ss a 100000
         gd x2 +- r 0 x1
         gd y2 +- b 0 x1
         M l x1; A x1 x1 cd4 -5400000; L x2 t; A x1 x1 cd2 -5400000; L r y2; A x1 x1 3cd4 -5400000; L x1 b; A x1 x1 0 -5400000; Z",
    ),
    (
        "foldedCorner",
        "av adj 16667
         gd a pin 0 adj 50000
         gd dy2 */ ss a 100000
         gd dy1 */ dy2 1 5
         gd x1 +- r 0 dy2
         gd x2 +- x1 dy1 0
         gd y2 +- b 0 dy2
         gd y1 +- y2 dy1 0
         path stroke=false; M l t; L r t; L r y2; L x1 b; L l b; Z
         path fill=darkenLess stroke=false; M x1 b; L x2 y1; L r y2; Z
         path fill=none; M x1 b; L x2 y1; L r y2; L x1 b; L l b; L l t; L r t; L r y2",
    ),
    (
        "corner",
        "av adj1 50000; av adj2 50000
         gd maxAdj1 */ 100000 h ss
         gd maxAdj2 */ 100000 w ss
         gd a1 pin 0 adj1 maxAdj1
         gd a2 pin 0 adj2 maxAdj2
         gd x1 */ ss a2 100000
         gd dy1 */ ss a1 100000
         gd y1 +- b 0 dy1
         M l t; L x1 t; L x1 y1; L r y1; L r b; L l b; Z",
    ),
    (
        "heart",
        "gd dx1 */ w 49 48
         gd dx2 */ w 10 48
         gd x1 +- hc 0 dx1
         gd x2 +- hc 0 dx2
         gd x3 +- hc dx2 0
         gd x4 +- hc dx1 0
         gd y1 +- t 0 hd3
         M hc hd4; C x3 y1 x4 hd4 hc b; C x1 hd4 x2 y1 hc hd4; Z",
    ),
    (
        "arc",
        "av adj1 16200000; av adj2 0
         gd stAng pin 0 adj1 21599999
         gd enAng pin 0 adj2 21599999
         gd sw11 +- enAng 0 stAng
         gd pos pin 0 sw11 1
         gd neg +- 1 0 pos
         gd wrap */ neg 21600000 1
         gd swAng +- sw11 wrap 0
         gd wt1 sin wd2 stAng
         gd ht1 cos hd2 stAng
         gd dx1 cat2 wd2 ht1 wt1
         gd dy1 sat2 hd2 ht1 wt1
         gd x1 +- hc dx1 0
         gd y1 +- vc dy1 0
         path stroke=false; M x1 y1; A wd2 hd2 stAng swAng; L hc vc; Z
         path fill=none; M x1 y1; A wd2 hd2 stAng swAng",
    ),
    (
        "pie",
        "av adj1 0; av adj2 16200000
         gd stAng pin 0 adj1 21599999
         gd enAng pin 0 adj2 21599999
         gd sw11 +- enAng 0 stAng
         gd pos pin 0 sw11 1
         gd neg +- 1 0 pos
         gd wrap */ neg 21600000 1
         gd swAng +- sw11 wrap 0
         gd wt1 sin wd2 stAng
         gd ht1 cos hd2 stAng
         gd dx1 cat2 wd2 ht1 wt1
         gd dy1 sat2 hd2 ht1 wt1
         gd x1 +- hc dx1 0
         gd y1 +- vc dy1 0
         M x1 y1; A wd2 hd2 stAng swAng; L hc vc; Z",
    ),
    (
        "leftBracket",
        "av adj 8333
         gd maxAdj */ 50000 h ss
         gd a pin 0 adj maxAdj
         gd y1 */ ss a 100000
         gd y2 +- b 0 y1
         path stroke=false; M r b; A w y1 cd4 cd4; L l y1; A w y1 cd2 cd4; Z
         path fill=none; M r b; A w y1 cd4 cd4; L l y1; A w y1 cd2 cd4",
    ),
    (
        "rightBracket",
        "av adj 8333
         gd maxAdj */ 50000 h ss
         gd a pin 0 adj maxAdj
         gd y1 */ ss a 100000
         gd y2 +- b 0 y1
         path stroke=false; M l t; A w y1 3cd4 cd4; L r y2; A w y1 0 cd4; Z
         path fill=none; M l t; A w y1 3cd4 cd4; L r y2; A w y1 0 cd4",
    ),
    (
        "bracketPair",
        "av adj 16667
         gd a pin 0 adj 50000
         gd x1 */ ss a 100000
         gd x2 +- r 0 x1
         gd y2 +- b 0 x1
         path stroke=false; M l x1; A x1 x1 cd2 cd4; L x2 t; A x1 x1 3cd4 cd4; L r y2; A x1 x1 0 cd4; L x1 b; A x1 x1 cd4 cd4; Z
         path fill=none; M x1 b; A x1 x1 cd4 cd4; L l x1; A x1 x1 cd2 cd4; M x2 t; A x1 x1 3cd4 cd4; L r y2; A x1 x1 0 cd4",
    ),
    (
        "mathMinus",
        "av adj1 23520
         gd a1 pin 0 adj1 100000
         gd dy1 */ h a1 200000
         gd dx1 */ w 73490 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc dy1 0
         gd x1 +- hc 0 dx1
         gd x2 +- hc dx1 0
         M x1 y1; L x2 y1; L x2 y2; L x1 y2; Z",
    ),
    (
        "wedgeRectCallout",
        "av adj1 -20833; av adj2 62500
         gd dxPos */ w adj1 100000
         gd dyPos */ h adj2 100000
         gd xPos +- hc dxPos 0
         gd yPos +- vc dyPos 0
         gd xb1 */ w 1 6
         gd xb2 */ w 1 3
         M l t; L r t; L r b; L xb2 b; L xPos yPos; L xb1 b; L l b; Z",
    ),
    (
        "lightningBolt",
        "path w=21600 h=21600
         M 8472 0; L 12860 6080; L 11050 6797; L 16577 12007; L 14767 12877; L 21600 21600
         L 10012 14915; L 12222 13987; L 5022 9705; L 7602 8382; L 0 3890; Z",
    ),
    ("flowChartProcess", "path w=1 h=1; M 0 0; L 1 0; L 1 1; L 0 1; Z"),
    ("flowChartDecision", "path w=2 h=2; M 0 1; L 1 0; L 2 1; L 1 2; Z"),
    (
        "flowChartTerminator",
        "path w=21600 h=21600; M 3475 0; L 18125 0; A 3475 10800 3cd4 cd2; L 3475 21600; A 3475 10800 cd4 cd2; Z",
    ),
    (
        "flowChartDocument",
        "path w=21600 h=21600; M 0 0; L 21600 0; L 21600 17322; C 10800 17322 10800 23922 0 20172; Z",
    ),
    ("flowChartInputOutput", "path w=5 h=5; M 0 5; L 1 0; L 5 0; L 4 5; Z"),
    (
        "flowChartPredefinedProcess",
        "path w=1 h=1 stroke=false; M 0 0; L 1 0; L 1 1; L 0 1; Z
         path w=8 h=8 fill=none; M 1 0; L 1 8; M 7 0; L 7 8
         path w=1 h=1 fill=none; M 0 0; L 1 0; L 1 1; L 0 1; Z",
    ),
    (
        "flowChartAlternateProcess",
        "gd x2 +- r 0 ssd6
         gd y2 +- b 0 ssd6
         M l ssd6; A ssd6 ssd6 cd2 cd4; L x2 t; A ssd6 ssd6 3cd4 cd4; L r y2; A ssd6 ssd6 0 cd4; L ssd6 b; A ssd6 ssd6 cd4 cd4; Z",
    ),
    ("flowChartManualInput", "path w=5 h=5; M 0 1; L 5 0; L 5 5; L 0 5; Z"),
    ("flowChartManualOperation", "path w=5 h=5; M 0 0; L 5 0; L 4 5; L 1 5; Z"),
    (
        "flowChartPreparation",
        "path w=10 h=10; M 0 5; L 2 0; L 8 0; L 10 5; L 8 10; L 2 10; Z",
    ),
    ("flowChartMerge", "path w=2 h=2; M 0 0; L 2 0; L 1 2; Z"),
    ("flowChartExtract", "path w=2 h=2; M 0 2; L 1 0; L 2 2; Z"),
    (
        "flowChartOffpageConnector",
        "path w=10 h=10; M 0 0; L 10 0; L 10 8; L 5 10; L 0 8; Z",
    ),
    ("flowChartDelay", "M l t; L hc t; A wd2 hd2 3cd4 cd2; L l b; Z"),
    (
        "teardrop",
        "av adj 100000
         gd a pin 0 adj 200000
         gd r2 sqrt 2
         gd tw */ r2 wd2 1
         gd th */ r2 hd2 1
         gd sw */ tw a 100000
         gd sh */ th a 100000
         gd dx1 cos sw 2700000
         gd dy1 sin sh 2700000
         gd x1 +- hc dx1 0
         gd y1 +- vc 0 dy1
         gd x2 +/ hc x1 2
         gd y2 +/ vc y1 2
         M l vc; A wd2 hd2 cd2 cd4; Q x2 t x1 y1; Q r y2 r vc; A wd2 hd2 0 cd4; A wd2 hd2 cd4 cd4; Z",
    ),
    (
        "chord",
        "av adj1 2700000; av adj2 16200000
         gd stAng pin 0 adj1 21599999
         gd enAng pin 0 adj2 21599999
         gd sw11 +- enAng 0 stAng
         gd pos pin 0 sw11 1
         gd neg +- 1 0 pos
         gd wrap */ neg 21600000 1
         gd swAng +- sw11 wrap 0
         gd wt1 sin wd2 stAng
         gd ht1 cos hd2 stAng
         gd dx1 cat2 wd2 ht1 wt1
         gd dy1 sat2 hd2 ht1 wt1
         gd x1 +- hc dx1 0
         gd y1 +- vc dy1 0
         M x1 y1; A wd2 hd2 stAng swAng; Z",
    ),
    (
        "blockArc",
        "av adj1 10800000; av adj2 0; av adj3 25000
         gd stAng pin 0 adj1 21599999
         gd istAng pin 0 adj2 21599999
         gd a3 pin 0 adj3 50000
         gd sw11 +- istAng 0 stAng
         gd pos pin 0 sw11 1
         gd neg +- 1 0 pos
         gd wrap */ neg 21600000 1
         gd swAng +- sw11 wrap 0
         gd iswAng +- 0 0 swAng
         gd wt1 sin wd2 stAng
         gd ht1 cos hd2 stAng
         gd dx1 cat2 wd2 ht1 wt1
         gd dy1 sat2 hd2 ht1 wt1
         gd x1 +- hc dx1 0
         gd y1 +- vc dy1 0
         gd dr */ ss a3 100000
         gd iwd2 +- wd2 0 dr
         gd ihd2 +- hd2 0 dr
         gd wt2 sin iwd2 istAng
         gd ht2 cos ihd2 istAng
         gd dx2 cat2 iwd2 ht2 wt2
         gd dy2 sat2 ihd2 ht2 wt2
         gd x2 +- hc dx2 0
         gd y2 +- vc dy2 0
         M x1 y1; A wd2 hd2 stAng swAng; L x2 y2; A iwd2 ihd2 istAng iswAng; Z",
    ),
    (
        "smileyFace",
        "av adj 4653
         gd a pin -4653 adj 4653
         gd x1 */ w 4969 21699
         gd x2 */ w 6215 21600
         gd x3 */ w 13135 21600
         gd x4 */ w 16640 21600
         gd y1 */ h 7570 21600
         gd y3 */ h 16515 21600
         gd dy2 */ h a 100000
         gd y2 +- y3 0 dy2
         gd y4 +- y3 dy2 0
         gd dy3 */ h a 50000
         gd y5 +- y4 dy3 0
         gd wR */ w 1125 21600
         gd hR */ h 1125 21600
         path; M l vc; A wd2 hd2 cd2 cd4; A wd2 hd2 3cd4 cd4; A wd2 hd2 0 cd4; A wd2 hd2 cd4 cd4; Z
         path fill=darkenLess; M x2 y1; A wR hR cd2 21600000; Z; M x3 y1; A wR hR cd2 21600000; Z
         path fill=none; M x1 y2; Q hc y5 x4 y2",
    ),
    (
        "moon",
        "av adj 50000
         gd a pin 0 adj 87500
         gd g0w */ w a 100000
         gd dx1 +- w 0 g0w
         M r b; A w hd2 cd4 cd2; A dx1 hd2 3cd4 -10800000; Z",
    ),
    (
        "cloud",
        "path w=43200 h=43200
         M 3900 14370; A 6753 9190 -11429249 7426832; A 5333 7267 -8646143 5396714
         A 4365 5945 -8748475 5983381; A 4857 6595 -7859164 7034504; A 5333 7273 -4722533 6541615
         A 6775 9220 -2776035 7816140; A 5785 7867 37501 6842000; A 6752 9215 1347096 6910353
         A 7720 10543 3974558 4542661; A 4360 5918 -16496525 8804134; A 4345 5945 -14809710 9151131; Z",
    ),
    (
        "cloudCallout",
        "av adj1 -20833; av adj2 62500
         gd dxPos */ w adj1 100000
         gd dyPos */ h adj2 100000
         gd xPos +- hc dxPos 0
         gd yPos +- vc dyPos 0
         gd dx1 */ dxPos 7 10
         gd dy1 */ dyPos 7 10
         gd dx2 */ dxPos 17 20
         gd dy2 */ dyPos 17 20
         gd cx1 +- hc dx1 0
         gd cy1 +- vc dy1 0
         gd cx2 +- hc dx2 0
         gd cy2 +- vc dy2 0
         gd r1 */ ss 1 16
         gd r2 */ ss 1 24
         gd r3 */ ss 1 40
         gd lx1 +- cx1 0 r1
         gd lx2 +- cx2 0 r2
         gd lx3 +- xPos 0 r3
         path w=43200 h=43200
         M 3900 14370; A 6753 9190 -11429249 7426832; A 5333 7267 -8646143 5396714
         A 4365 5945 -8748475 5983381; A 4857 6595 -7859164 7034504; A 5333 7273 -4722533 6541615
         A 6775 9220 -2776035 7816140; A 5785 7867 37501 6842000; A 6752 9215 1347096 6910353
         A 7720 10543 3974558 4542661; A 4360 5918 -16496525 8804134; A 4345 5945 -14809710 9151131; Z
         path; M lx1 cy1; A r1 r1 cd2 21600000; Z; M lx2 cy2; A r2 r2 cd2 21600000; Z; M lx3 yPos; A r3 r3 cd2 21600000; Z",
    ),
    (
        "wave",
        "av adj1 12500; av adj2 0
         gd a1 pin 0 adj1 20000
         gd y1 */ h a1 100000
         gd dy2 */ y1 10 3
         gd y2 +- y1 0 dy2
         gd y3 +- y1 dy2 0
         gd y4 +- b 0 y1
         gd y5 +- y4 0 dy2
         gd y6 +- y4 dy2 0
         gd x2 */ w 1 3
         gd x3 */ w 2 3
         M l y1; C x2 y2 x3 y3 r y1; L r y4; C x3 y6 x2 y5 l y4; Z",
    ),
    (
        "doubleWave",
        "av adj1 6250; av adj2 0
         gd a1 pin 0 adj1 12500
         gd y1 */ h a1 100000
         gd dy2 */ y1 10 3
         gd y2 +- y1 0 dy2
         gd y3 +- y1 dy2 0
         gd y4 +- b 0 y1
         gd y5 +- y4 0 dy2
         gd y6 +- y4 dy2 0
         gd x1 */ w 1 6
         gd x2 */ w 1 3
         gd x4 */ w 2 3
         gd x5 */ w 5 6
         M l y1; C x1 y2 x2 y3 hc y1; C x4 y2 x5 y3 r y1; L r y4
         C x5 y6 x4 y5 hc y4; C x2 y6 x1 y5 l y4; Z",
    ),
    (
        "ribbon",
        "av adj1 16667; av adj2 50000
         gd a1 pin 0 adj1 33333
         gd a2 pin 25000 adj2 75000
         gd x10 +- r 0 wd8
         gd dx2 */ w a2 200000
         gd x2 +- hc 0 dx2
         gd x9 +- hc dx2 0
         gd x3 +- x2 wd32 0
         gd x8 +- x9 0 wd32
         gd y1 */ h a1 100000
         gd y2 +- b 0 y1
         gd ym +/ y1 b 2
         path; M l y1; L x2 y1; L x2 t; L x9 t; L x9 y1; L r y1; L x10 ym; L r b; L x8 b; L x8 y2; L x3 y2; L x3 b; L l b; L wd8 ym; Z
         path fill=darkenLess stroke=false; M x2 y2; L x3 y2; L x3 b; Z; M x9 y2; L x8 b; L x8 y2; Z",
    ),
    (
        "ribbon2",
        "av adj1 16667; av adj2 50000
         gd a1 pin 0 adj1 33333
         gd a2 pin 25000 adj2 75000
         gd x10 +- r 0 wd8
         gd dx2 */ w a2 200000
         gd x2 +- hc 0 dx2
         gd x9 +- hc dx2 0
         gd x3 +- x2 wd32 0
         gd x8 +- x9 0 wd32
         gd y1 */ h a1 100000
         gd y2 +- b 0 y1
         gd ym */ y2 1 2
         path; M l y2; L x2 y2; L x2 b; L x9 b; L x9 y2; L r y2; L x10 ym; L r t; L x8 t; L x8 y1; L x3 y1; L x3 t; L l t; L wd8 ym; Z
         path fill=darkenLess stroke=false; M x2 y1; L x3 y1; L x3 t; Z; M x9 y1; L x8 t; L x8 y1; Z",
    ),
    (
        "ellipseRibbon",
        "av adj1 25000; av adj2 50000; av adj3 12500
         gd a1 pin 0 adj1 33333
         gd a2 pin 25000 adj2 75000
         gd a3 pin 0 adj3 a1
         gd x10 +- r 0 wd8
         gd dx2 */ w a2 200000
         gd x2 +- hc 0 dx2
         gd x9 +- hc dx2 0
         gd x3 +- x2 wd32 0
         gd x8 +- x9 0 wd32
         gd y1 */ h a1 100000
         gd y2 +- b 0 y1
         gd ym +/ y1 b 2
         gd dy3 */ h a3 100000
         gd cy1 +- 0 0 dy3
         gd y2c +- y2 0 dy3
         gd y2c2 +- y2c 0 dy3
         M l y1; L x2 y1; L x2 dy3; Q hc cy1 x9 dy3; L x9 y1; L r y1; L x10 ym; L r b; L x8 b; L x8 y2; Q hc y2c2 x3 y2; L x3 b; L l b; L wd8 ym; Z",
    ),
    (
        "ellipseRibbon2",
        "av adj1 25000; av adj2 50000; av adj3 12500
         gd a1 pin 0 adj1 33333
         gd a2 pin 25000 adj2 75000
         gd a3 pin 0 adj3 a1
         gd x10 +- r 0 wd8
         gd dx2 */ w a2 200000
         gd x2 +- hc 0 dx2
         gd x9 +- hc dx2 0
         gd x3 +- x2 wd32 0
         gd x8 +- x9 0 wd32
         gd y1 */ h a1 100000
         gd y2 +- b 0 y1
         gd ym */ y2 1 2
         gd dy3 */ h a3 100000
         gd by3 +- b 0 dy3
         gd cb +- b dy3 0
         gd y1c +- y1 dy3 0
         gd y1c2 +- y1c dy3 0
         M l y2; L x2 y2; L x2 by3; Q hc cb x9 by3; L x9 y2; L r y2; L x10 ym; L r t; L x8 t; L x8 y1; Q hc y1c2 x3 y1; L x3 t; L l t; L wd8 ym; Z",
    ),
    (
        "horizontalScroll",
        "av adj 12500
         gd a pin 0 adj 25000
         gd ch */ ss a 100000
         gd ch2 */ ch 1 2
         gd x4 +- r 0 ch2
         gd y6 +- b 0 ch
         gd y7 +- b 0 ch2
         path; M l ch2; L r ch2; L r y7; L l y7; Z
         path fill=darkenLess; M l ch2; A ch2 ch2 cd2 cd4; L x4 t; A ch2 ch2 3cd4 cd2; L ch2 ch; A ch2 ch2 cd4 cd4; Z
         M l y7; A ch2 ch2 cd2 cd4; L x4 y6; A ch2 ch2 3cd4 cd2; L ch2 b; A ch2 ch2 cd4 cd4; Z",
    ),
    (
        "verticalScroll",
        "av adj 12500
         gd a pin 0 adj 25000
         gd ch */ ss a 100000
         gd ch2 */ ch 1 2
         gd x3 +- r 0 ch
         gd x4 +- r 0 ch2
         gd y7 +- b 0 ch2
         path; M ch2 t; L x4 t; L x4 b; L ch2 b; Z
         path fill=darkenLess; M l ch2; A ch2 ch2 cd2 cd2; L ch y7; A ch2 ch2 0 cd2; Z
         M x3 ch2; A ch2 ch2 cd2 cd2; L r y7; A ch2 ch2 0 cd2; Z",
    ),
    (
        "quadArrow",
        "av adj1 22500; av adj2 22500; av adj3 22500
         gd a2 pin 0 adj2 50000
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd q1 +- 100000 0 maxAdj1
         gd maxAdj3 */ q1 1 2
         gd a3 pin 0 adj3 maxAdj3
         gd x1 */ ss a3 100000
         gd dx2 */ ss a2 100000
         gd x2 +- hc 0 dx2
         gd x5 +- hc dx2 0
         gd dx3 */ ss a1 200000
         gd x3 +- hc 0 dx3
         gd x4 +- hc dx3 0
         gd x6 +- r 0 x1
         gd y2 +- vc 0 dx2
         gd y5 +- vc dx2 0
         gd y3 +- vc 0 dx3
         gd y4 +- vc dx3 0
         gd y6 +- b 0 x1
         M l vc; L x1 y2; L x1 y3; L x3 y3; L x3 x1; L x2 x1; L hc t; L x5 x1; L x4 x1; L x4 y3; L x6 y3; L x6 y2
         L r vc; L x6 y5; L x6 y4; L x4 y4; L x4 y6; L x5 y6; L hc b; L x2 y6; L x3 y6; L x3 y4; L x1 y4; L x1 y5; Z",
    ),
    (
        "leftRightUpArrow",
        "av adj1 25000; av adj2 25000; av adj3 25000
         gd a2 pin 0 adj2 50000
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd q1 +- 100000 0 maxAdj1
         gd maxAdj3 */ q1 1 2
         gd a3 pin 0 adj3 maxAdj3
         gd x1 */ ss a3 100000
         gd dx2 */ ss a2 100000
         gd x2 +- hc 0 dx2
         gd x5 +- hc dx2 0
         gd dx3 */ ss a1 200000
         gd x3 +- hc 0 dx3
         gd x4 +- hc dx3 0
         gd x6 +- r 0 x1
         gd dy2 */ ss a2 50000
         gd y1 +- b 0 dy2
         gd y2 +- b 0 dx2
         gd y3 +- y2 0 dx3
         gd y4 +- y2 dx3 0
         M l y2; L x1 y1; L x1 y3; L x3 y3; L x3 x1; L x2 x1; L hc t; L x5 x1; L x4 x1; L x4 y3; L x6 y3; L x6 y1
         L r y2; L x6 b; L x6 y4; L x1 y4; L x1 b; Z",
    ),
    (
        "leftUpArrow",
        "av adj1 25000; av adj2 25000; av adj3 25000
         gd a2 pin 0 adj2 50000
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd maxAdj3 +- 100000 0 maxAdj1
         gd a3 pin 0 adj3 maxAdj3
         gd x1 */ ss a3 100000
         gd dx2 */ ss a2 50000
         gd x2 +- r 0 dx2
         gd y2 +- b 0 dx2
         gd dx4 */ ss a2 100000
         gd x4 +- r 0 dx4
         gd y4 +- b 0 dx4
         gd dx3 */ ss a1 200000
         gd x3 +- x4 0 dx3
         gd x5 +- x4 dx3 0
         gd y3 +- y4 0 dx3
         gd y5 +- y4 dx3 0
         M l y4; L x1 y2; L x1 y3; L x3 y3; L x3 x1; L x2 x1; L x4 t; L r x1; L x5 x1; L x5 y5; L x1 y5; L x1 b; Z",
    ),
    (
        "bentUpArrow",
        "av adj1 25000; av adj2 25000; av adj3 25000
         gd a1 pin 0 adj1 50000
         gd a2 pin 0 adj2 50000
         gd a3 pin 0 adj3 50000
         gd y1 */ ss a3 100000
         gd dx1 */ ss a2 50000
         gd x1 +- r 0 dx1
         gd dx3 */ ss a2 100000
         gd x3 +- r 0 dx3
         gd dx2 */ ss a1 200000
         gd x2 +- x3 0 dx2
         gd x4 +- x3 dx2 0
         gd dy2 */ ss a1 100000
         gd y2 +- b 0 dy2
         M l y2; L x2 y2; L x2 y1; L x1 y1; L x3 t; L r y1; L x4 y1; L x4 b; L l b; Z",
    ),
    (
        "uturnArrow",
        "av adj1 25000; av adj2 25000; av adj3 25000; av adj4 43750; av adj5 75000
         gd a2 pin 0 adj2 25000
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd q2 */ a1 ss h
         gd q3 +- 100000 0 q2
         gd maxAdj3 */ q3 h ss
         gd a3 pin 0 adj3 maxAdj3
         gd q1 +- a3 a1 0
         gd minAdj5 */ q1 ss h
         gd a5 pin minAdj5 adj5 100000
         gd th */ ss a1 100000
         gd aw2 */ ss a2 100000
         gd th2 */ th 1 2
         gd dh2 +- aw2 0 th2
         gd y5 */ h a5 100000
         gd ah */ ss a3 100000
         gd y4 +- y5 0 ah
         gd x9 +- r 0 dh2
         gd bw */ x9 1 2
         gd bs min bw y4
         gd maxAdj4 */ bs 100000 ss
         gd a4 pin 0 adj4 maxAdj4
         gd bd */ ss a4 100000
         gd bd3 +- bd 0 th
         gd bd2 max bd3 0
         gd x3 +- th bd2 0
         gd x8 +- r 0 aw2
         gd x6 +- x8 0 aw2
         gd x7 +- x6 dh2 0
         gd x4 +- x9 0 bd
         gd x5 +- x7 0 bd2
         M l b; L l bd; A bd bd cd2 cd4; L x4 t; A bd bd 3cd4 cd4; L x9 y4; L r y4; L x8 y5; L x6 y4; L x7 y4
         L x7 x3; A bd2 bd2 0 -5400000; L x3 th; A bd2 bd2 3cd4 -5400000; L th b; Z",
    ),
    (
        "curvedRightArrow",
        "av adj1 25000; av adj2 50000; av adj3 25000
         gd a2 pin 0 adj2 50000
         gd a1 pin 0 adj1 a2
         gd a3 pin 0 adj3 50000
         gd th */ ss a1 100000
         gd aw */ ss a2 100000
         gd ah */ ss a3 100000
         gd x1 +- r 0 ah
         gd aw2 */ aw 1 2
         gd th2 */ th 1 2
         gd iy +- b 0 aw2
         gd yob +- iy th2 0
         gd hO */ yob 1 2
         gd yib +- iy 0 th2
         gd yh1 +- iy 0 aw2
         gd wI +- x1 0 th
         gd hI +- hO 0 th
         M x1 t; A x1 hO 3cd4 -10800000; L x1 b; L r iy; L x1 yh1; L x1 yib; A wI hI cd4 cd2; Z",
    ),
    (
        "curvedLeftArrow",
        "av adj1 25000; av adj2 50000; av adj3 25000
         gd a2 pin 0 adj2 50000
         gd a1 pin 0 adj1 a2
         gd a3 pin 0 adj3 50000
         gd th */ ss a1 100000
         gd aw */ ss a2 100000
         gd ah */ ss a3 100000
         gd x1 +- r 0 ah
         gd aw2 */ aw 1 2
         gd th2 */ th 1 2
         gd iy +- b 0 aw2
         gd yob +- iy th2 0
         gd hO */ yob 1 2
         gd yib +- iy 0 th2
         gd yh1 +- iy 0 aw2
         gd wI +- x1 0 th
         gd hI +- hO 0 th
         M ah t; A x1 hO 3cd4 cd2; L ah b; L l iy; L ah yh1; L ah yib; A wI hI cd4 -10800000; Z",
    ),
    (
        "curvedDownArrow",
        "av adj1 25000; av adj2 50000; av adj3 25000
         gd a2 pin 0 adj2 50000
         gd a1 pin 0 adj1 a2
         gd a3 pin 0 adj3 50000
         gd th */ ss a1 100000
         gd aw */ ss a2 100000
         gd ah */ ss a3 100000
         gd y1 +- b 0 ah
         gd aw2 */ aw 1 2
         gd th2 */ th 1 2
         gd ix +- r 0 aw2
         gd xob +- ix th2 0
         gd wO */ xob 1 2
         gd xib +- ix 0 th2
         gd xh1 +- ix 0 aw2
         gd wI +- wO 0 th
         gd hI +- y1 0 th
         M l y1; A wO y1 cd2 cd2; L r y1; L ix b; L xh1 y1; L xib y1; A wI hI 0 -10800000; Z",
    ),
    (
        "curvedUpArrow",
        "av adj1 25000; av adj2 50000; av adj3 25000
         gd a2 pin 0 adj2 50000
         gd a1 pin 0 adj1 a2
         gd a3 pin 0 adj3 50000
         gd th */ ss a1 100000
         gd aw */ ss a2 100000
         gd ah */ ss a3 100000
         gd y1 +- b 0 ah
         gd aw2 */ aw 1 2
         gd th2 */ th 1 2
         gd ix +- r 0 aw2
         gd xob +- ix th2 0
         gd wO */ xob 1 2
         gd xib +- ix 0 th2
         gd xh1 +- ix 0 aw2
         gd wI +- wO 0 th
         gd hI +- y1 0 th
         M l ah; A wO y1 cd2 -10800000; L r ah; L ix t; L xh1 ah; L xib ah; A wI hI 0 cd2; Z",
    ),
    (
        "circularArrow",
        "av adj1 12500; av adj2 1142319; av adj3 20457681; av adj4 10800000; av adj5 12500
         gd a5 pin 0 adj5 25000
         gd a1 pin 0 adj1 a5
         gd stAng pin 0 adj4 21599999
         gd enAng pin 0 adj3 21599999
         gd hdAng pin 0 adj2 2700000
         gd th */ ss a1 100000
         gd hw */ ss a5 100000
         gd th2 */ th 1 2
         gd rcx +- wd2 0 hw
         gd rcy +- hd2 0 hw
         gd wo +- rcx th2 0
         gd ho +- rcy th2 0
         gd wi +- rcx 0 th2
         gd hi +- rcy 0 th2
         gd wh1 +- rcx hw 0
         gd hh1 +- rcy hw 0
         gd wh2 +- rcx 0 hw
         gd hh2 +- rcy 0 hw
         gd sw11 +- enAng 0 stAng
         gd pos pin 0 sw11 1
         gd neg +- 1 0 pos
         gd wrap */ neg 21600000 1
         gd swAng +- sw11 wrap 0
         gd iswAng +- 0 0 swAng
         gd tipAng +- enAng hdAng 0
         gd wt1 sin wo stAng
         gd ht1 cos ho stAng
         gd dx1 cat2 wo ht1 wt1
         gd dy1 sat2 ho ht1 wt1
         gd x1 +- hc dx1 0
         gd y1 +- vc dy1 0
         gd wt2 sin wh1 enAng
         gd ht2 cos hh1 enAng
         gd dx2 cat2 wh1 ht2 wt2
         gd dy2 sat2 hh1 ht2 wt2
         gd x2 +- hc dx2 0
         gd y2 +- vc dy2 0
         gd wt3 sin rcx tipAng
         gd ht3 cos rcy tipAng
         gd dx3 cat2 rcx ht3 wt3
         gd dy3 sat2 rcy ht3 wt3
         gd x3 +- hc dx3 0
         gd y3 +- vc dy3 0
         gd wt4 sin wh2 enAng
         gd ht4 cos hh2 enAng
         gd dx4 cat2 wh2 ht4 wt4
         gd dy4 sat2 hh2 ht4 wt4
         gd x4 +- hc dx4 0
         gd y4 +- vc dy4 0
         gd wt5 sin wi enAng
         gd ht5 cos hi enAng
         gd dx5 cat2 wi ht5 wt5
         gd dy5 sat2 hi ht5 wt5
         gd x5 +- hc dx5 0
         gd y5 +- vc dy5 0
         M x1 y1; A wo ho stAng swAng; L x2 y2; L x3 y3; L x4 y4; L x5 y5; A wi hi enAng iswAng; Z",
    ),
    (
        "stripedRightArrow",
        "av adj1 50000; av adj2 50000
         gd maxAdj2 */ 84375 w ss
         gd a1 pin 0 adj1 100000
         gd a2 pin 0 adj2 maxAdj2
         gd x4 */ ss 5 32
         gd dx5 */ ss a2 100000
         gd x5 +- r 0 dx5
         gd dy1 */ h a1 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc dy1 0
         M l y1; L ssd32 y1; L ssd32 y2; L l y2; Z
         M ssd16 y1; L ssd8 y1; L ssd8 y2; L ssd16 y2; Z
         M x4 y1; L x5 y1; L x5 t; L r vc; L x5 b; L x5 y2; L x4 y2; Z",
    ),
    (
        "rightArrowCallout",
        "av adj1 25000; av adj2 25000; av adj3 25000; av adj4 64977
         gd maxAdj2 */ 50000 h ss
         gd a2 pin 0 adj2 maxAdj2
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd maxAdj3 */ 100000 w ss
         gd a3 pin 0 adj3 maxAdj3
         gd q2 */ a3 ss w
         gd maxAdj4 +- 100000 0 q2
         gd a4 pin 0 adj4 maxAdj4
         gd dy1 */ ss a2 100000
         gd dy2 */ ss a1 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc 0 dy2
         gd y3 +- vc dy2 0
         gd y4 +- vc dy1 0
         gd dx3 */ ss a3 100000
         gd x3 +- r 0 dx3
         gd x2 */ w a4 100000
         M l t; L x2 t; L x2 y2; L x3 y2; L x3 y1; L r vc; L x3 y4; L x3 y3; L x2 y3; L x2 b; L l b; Z",
    ),
    (
        "leftArrowCallout",
        "av adj1 25000; av adj2 25000; av adj3 25000; av adj4 64977
         gd maxAdj2 */ 50000 h ss
         gd a2 pin 0 adj2 maxAdj2
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd maxAdj3 */ 100000 w ss
         gd a3 pin 0 adj3 maxAdj3
         gd q2 */ a3 ss w
         gd maxAdj4 +- 100000 0 q2
         gd a4 pin 0 adj4 maxAdj4
         gd dy1 */ ss a2 100000
         gd dy2 */ ss a1 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc 0 dy2
         gd y3 +- vc dy2 0
         gd y4 +- vc dy1 0
         gd x1 */ ss a3 100000
         gd dx2 */ w a4 100000
         gd x2 +- r 0 dx2
         M l vc; L x1 y1; L x1 y2; L x2 y2; L x2 t; L r t; L r b; L x2 b; L x2 y3; L x1 y3; L x1 y4; Z",
    ),
    (
        "downArrowCallout",
        "av adj1 25000; av adj2 25000; av adj3 25000; av adj4 64977
         gd maxAdj2 */ 50000 w ss
         gd a2 pin 0 adj2 maxAdj2
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd maxAdj3 */ 100000 h ss
         gd a3 pin 0 adj3 maxAdj3
         gd q2 */ a3 ss h
         gd maxAdj4 +- 100000 0 q2
         gd a4 pin 0 adj4 maxAdj4
         gd dx1 */ ss a2 100000
         gd dx2 */ ss a1 200000
         gd x1 +- hc 0 dx1
         gd x2 +- hc 0 dx2
         gd x3 +- hc dx2 0
         gd x4 +- hc dx1 0
         gd dy3 */ ss a3 100000
         gd y3 +- b 0 dy3
         gd y2 */ h a4 100000
         M l t; L r t; L r y2; L x3 y2; L x3 y3; L x4 y3; L hc b; L x1 y3; L x2 y3; L x2 y2; L l y2; Z",
    ),
    (
        "upArrowCallout",
        "av adj1 25000; av adj2 25000; av adj3 25000; av adj4 64977
         gd maxAdj2 */ 50000 w ss
         gd a2 pin 0 adj2 maxAdj2
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd maxAdj3 */ 100000 h ss
         gd a3 pin 0 adj3 maxAdj3
         gd q2 */ a3 ss h
         gd maxAdj4 +- 100000 0 q2
         gd a4 pin 0 adj4 maxAdj4
         gd dx1 */ ss a2 100000
         gd dx2 */ ss a1 200000
         gd x1 +- hc 0 dx1
         gd x2 +- hc 0 dx2
         gd x3 +- hc dx2 0
         gd x4 +- hc dx1 0
         gd y1 */ ss a3 100000
         gd dy2 */ h a4 100000
         gd y2 +- b 0 dy2
         M l y2; L x2 y2; L x2 y1; L x1 y1; L hc t; L x4 y1; L x3 y1; L x3 y2; L r y2; L r b; L l b; Z",
    ),
    (
        "leftRightArrowCallout",
        "av adj1 25000; av adj2 25000; av adj3 25000; av adj4 48123
         gd maxAdj2 */ 50000 h ss
         gd a2 pin 0 adj2 maxAdj2
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd maxAdj3 */ 50000 w ss
         gd a3 pin 0 adj3 maxAdj3
         gd q2 */ a3 ss wd2
         gd maxAdj4 +- 100000 0 q2
         gd a4 pin 0 adj4 maxAdj4
         gd dy1 */ ss a2 100000
         gd dy2 */ ss a1 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc 0 dy2
         gd y3 +- vc dy2 0
         gd y4 +- vc dy1 0
         gd x1 */ ss a3 100000
         gd x4 +- r 0 x1
         gd dx2 */ w a4 200000
         gd x2 +- hc 0 dx2
         gd x3 +- hc dx2 0
         M l vc; L x1 y1; L x1 y2; L x2 y2; L x2 t; L x3 t; L x3 y2; L x4 y2; L x4 y1; L r vc
         L x4 y4; L x4 y3; L x3 y3; L x3 b; L x2 b; L x2 y3; L x1 y3; L x1 y4; Z",
    ),
    (
        "upDownArrowCallout",
        "av adj1 25000; av adj2 25000; av adj3 25000; av adj4 48123
         gd maxAdj2 */ 50000 w ss
         gd a2 pin 0 adj2 maxAdj2
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd maxAdj3 */ 50000 h ss
         gd a3 pin 0 adj3 maxAdj3
         gd q2 */ a3 ss hd2
         gd maxAdj4 +- 100000 0 q2
         gd a4 pin 0 adj4 maxAdj4
         gd dx1 */ ss a2 100000
         gd dx2 */ ss a1 200000
         gd x1 +- hc 0 dx1
         gd x2 +- hc 0 dx2
         gd x3 +- hc dx2 0
         gd x4 +- hc dx1 0
         gd y1 */ ss a3 100000
         gd y4 +- b 0 y1
         gd dy2 */ h a4 200000
         gd y2 +- vc 0 dy2
         gd y3 +- vc dy2 0
         M l y2; L x2 y2; L x2 y1; L x1 y1; L hc t; L x4 y1; L x3 y1; L x3 y2; L r y2
         L r y3; L x3 y3; L x3 y4; L x4 y4; L hc b; L x1 y4; L x2 y4; L x2 y3; L l y3; Z",
    ),
    (
        "quadArrowCallout",
        "av adj1 18515; av adj2 18515; av adj3 18515; av adj4 48123
         gd a2 pin 0 adj2 50000
         gd maxAdj1 */ a2 2 1
         gd a1 pin 0 adj1 maxAdj1
         gd maxAdj3 +- 50000 0 a2
         gd a3 pin 0 adj3 maxAdj3
         gd q2 */ a3 2 1
         gd maxAdj4 +- 100000 0 q2
         gd a4 pin a1 adj4 maxAdj4
         gd dx2 */ ss a2 100000
         gd dx3 */ ss a1 200000
         gd ah */ ss a3 100000
         gd dx1 */ w a4 200000
         gd dy1 */ h a4 200000
         gd x8 +- r 0 ah
         gd x2 +- hc 0 dx1
         gd x7 +- hc dx1 0
         gd x3 +- hc 0 dx2
         gd x6 +- hc dx2 0
         gd x4 +- hc 0 dx3
         gd x5 +- hc dx3 0
         gd y8 +- b 0 ah
         gd y2 +- vc 0 dy1
         gd y7 +- vc dy1 0
         gd y3 +- vc 0 dx2
         gd y6 +- vc dx2 0
         gd y4 +- vc 0 dx3
         gd y5 +- vc dx3 0
         M l vc; L ah y3; L ah y4; L x2 y4; L x2 y2; L x4 y2; L x4 ah; L x3 ah; L hc t; L x6 ah; L x5 ah; L x5 y2
         L x7 y2; L x7 y4; L x8 y4; L x8 y3; L r vc; L x8 y6; L x8 y5; L x7 y5; L x7 y7; L x5 y7; L x5 y8
         L x6 y8; L hc b; L x3 y8; L x4 y8; L x4 y7; L x2 y7; L x2 y5; L ah y5; L ah y6; Z",
    ),
    (
        "wedgeRoundRectCallout",
        "av adj1 -20833; av adj2 62500; av adj3 16667
         gd dxPos */ w adj1 100000
         gd dyPos */ h adj2 100000
         gd xPos +- hc dxPos 0
         gd yPos +- vc dyPos 0
         gd xb1 */ w 1 6
         gd xb2 */ w 1 3
         gd u1 */ ss adj3 100000
         gd u2 +- r 0 u1
         gd v2 +- b 0 u1
         M l u1; A u1 u1 cd2 cd4; L u2 t; A u1 u1 3cd4 cd4; L r v2; A u1 u1 0 cd4; L xb2 b; L xPos yPos; L xb1 b
         L u1 b; A u1 u1 cd4 cd4; Z",
    ),
    (
        "wedgeEllipseCallout",
        "av adj1 -20833; av adj2 62500
         gd dxPos */ w adj1 100000
         gd dyPos */ h adj2 100000
         gd xPos +- hc dxPos 0
         gd yPos +- vc dyPos 0
         gd wt1 sin wd2 6000000
         gd ht1 cos hd2 6000000
         gd dx1 cat2 wd2 ht1 wt1
         gd dy1 sat2 hd2 ht1 wt1
         gd x1 +- hc dx1 0
         gd y1 +- vc dy1 0
         M x1 y1; A wd2 hd2 6000000 20400000; L xPos yPos; Z",
    ),
    (
        "mathPlus",
        "av adj1 23520
         gd a1 pin 0 adj1 73490
         gd dx1 */ w 73490 200000
         gd dy1 */ h 73490 200000
         gd dx2 */ ss a1 200000
         gd x1 +- hc 0 dx1
         gd x2 +- hc 0 dx2
         gd x3 +- hc dx2 0
         gd x4 +- hc dx1 0
         gd y1 +- vc 0 dy1
         gd y2 +- vc 0 dx2
         gd y3 +- vc dx2 0
         gd y4 +- vc dy1 0
         M x1 y2; L x2 y2; L x2 y1; L x3 y1; L x3 y2; L x4 y2; L x4 y3; L x3 y3; L x3 y4; L x2 y4; L x2 y3; L x1 y3; Z",
    ),
    (
        "mathMultiply",
        "av adj1 23520
         gd a1 pin 0 adj1 51965
         gd len */ ss 73490 200000
         gd k */ len 70711 100000
         gd th */ ss a1 100000
         gd t2 */ th 1 2
         gd m */ t2 70711 100000
         gd c */ t2 141421 100000
         gd km +- k 0 m
         gd kp +- k m 0
         gd x1 +- hc 0 kp
         gd x2 +- hc 0 km
         gd x3 +- hc 0 c
         gd x4 +- hc c 0
         gd x5 +- hc km 0
         gd x6 +- hc kp 0
         gd y1 +- vc 0 kp
         gd y2 +- vc 0 km
         gd y3 +- vc 0 c
         gd y4 +- vc c 0
         gd y5 +- vc km 0
         gd y6 +- vc kp 0
         M hc y3; L x5 y1; L x6 y2; L x4 vc; L x6 y5; L x5 y6; L hc y4; L x2 y6; L x1 y5; L x3 vc; L x1 y2; L x2 y1; Z",
    ),
    (
        "mathDivide",
        "av adj1 23520; av adj2 5880; av adj3 11760
         gd a1 pin 1000 adj1 36745
         gd a2 pin 0 adj2 20000
         gd a3 pin 1000 adj3 20000
         gd dy1 */ h a1 200000
         gd dx1 */ w 73490 200000
         gd y1 +- vc 0 dy1
         gd y2 +- vc dy1 0
         gd x1 +- hc 0 dx1
         gd x2 +- hc dx1 0
         gd gap */ h a2 100000
         gd rad */ h a3 200000
         gd yd1 +- y1 0 gap
         gd yd1c +- yd1 0 rad
         gd yd2 +- y2 gap 0
         gd yd2c +- yd2 rad 0
         gd xl +- hc 0 rad
         M x1 y1; L x2 y1; L x2 y2; L x1 y2; Z
         M xl yd1c; A rad rad cd2 cd2; A rad rad 0 cd2; Z
         M xl yd2c; A rad rad cd2 cd2; A rad rad 0 cd2; Z",
    ),
    (
        "mathEqual",
        "av adj1 23520; av adj2 11760
         gd a1 pin 0 adj1 36745
         gd a2 pin 0 adj2 36745
         gd dy1 */ h a1 100000
         gd dy2 */ h a2 200000
         gd dx1 */ w 73490 200000
         gd y2 +- vc 0 dy2
         gd y1 +- y2 0 dy1
         gd y3 +- vc dy2 0
         gd y4 +- y3 dy1 0
         gd x1 +- hc 0 dx1
         gd x2 +- hc dx1 0
         M x1 y1; L x2 y1; L x2 y2; L x1 y2; Z; M x1 y3; L x2 y3; L x2 y4; L x1 y4; Z",
    ),
    (
        "mathNotEqual",
        "av adj1 23520; av adj2 6600000; av adj3 11760
         gd a1 pin 0 adj1 50000
         gd a3 pin 0 adj3 36745
         gd dy1 */ h a1 100000
         gd dy2 */ h a3 200000
         gd dx1 */ w 73490 200000
         gd y2 +- vc 0 dy2
         gd y1 +- y2 0 dy1
         gd y3 +- vc dy2 0
         gd y4 +- y3 dy1 0
         gd x1 +- hc 0 dx1
         gd x2 +- hc dx1 0
         gd dxs */ w 12000 100000
         gd yt +- y1 0 dy1
         gd yb +- y4 dy1 0
         gd tw2 */ dy1 1 2
         gd xt +- hc dxs 0
         gd xb +- hc 0 dxs
         gd xt1 +- xt 0 tw2
         gd xt2 +- xt tw2 0
         gd xb1 +- xb 0 tw2
         gd xb2 +- xb tw2 0
         M x1 y1; L x2 y1; L x2 y2; L x1 y2; Z; M x1 y3; L x2 y3; L x2 y4; L x1 y4; Z
         M xt1 yt; L xt2 yt; L xb2 yb; L xb1 yb; Z",
    ),
    ("flowChartPunchedCard", "path w=5 h=5; M 0 1; L 1 0; L 5 0; L 5 5; L 0 5; Z"),
    (
        "flowChartPunchedTape",
        "path w=20 h=20; M 0 2; Q 5 6 10 2; Q 15 -2 20 2; L 20 18; Q 15 14 10 18; Q 5 22 0 18; Z",
    ),
    (
        "flowChartSummingJunction",
        "gd idx cos wd2 2700000
         gd idy sin hd2 2700000
         gd il +- hc 0 idx
         gd ir +- hc idx 0
         gd it +- vc 0 idy
         gd ib +- vc idy 0
         path; M l vc; A wd2 hd2 cd2 cd4; A wd2 hd2 3cd4 cd4; A wd2 hd2 0 cd4; A wd2 hd2 cd4 cd4; Z
         path fill=none; M il it; L ir ib; M ir it; L il ib",
    ),
    (
        "flowChartOr",
        "path; M l vc; A wd2 hd2 cd2 cd4; A wd2 hd2 3cd4 cd4; A wd2 hd2 0 cd4; A wd2 hd2 cd4 cd4; Z
         path fill=none; M hc t; L hc b; M l vc; L r vc",
    ),
    ("flowChartCollate", "path w=2 h=2; M 0 0; L 2 0; L 1 1; L 2 2; L 0 2; L 1 1; Z"),
    (
        "flowChartSort",
        "path w=2 h=2; M 0 1; L 1 0; L 2 1; L 1 2; Z
         path w=2 h=2 fill=none; M 0 1; L 2 1",
    ),
    (
        "flowChartOnlineStorage",
        "path w=6 h=6; M 1 0; L 6 0; A 1 3 3cd4 -10800000; L 1 6; A 1 3 cd4 cd2; Z",
    ),
    (
        "flowChartMagneticDisk",
        "path w=6 h=6; M 0 1; A 3 1 cd2 cd2; L 6 5; A 3 1 0 cd2; Z
         path w=6 h=6 fill=none; M 6 1; A 3 1 0 cd2",
    ),
    (
        "flowChartMagneticDrum",
        "path w=6 h=6; M 1 0; L 5 0; A 1 3 3cd4 cd2; L 1 6; A 1 3 cd4 cd2; Z
         path w=6 h=6 fill=none; M 5 6; A 1 3 cd4 cd2",
    ),
    (
        "flowChartMagneticTape",
        "gd idy sin hd2 2700000
         gd ib +- vc idy 0
         M hc b; A wd2 hd2 cd4 cd4; A wd2 hd2 cd2 cd4; A wd2 hd2 3cd4 cd4; A wd2 hd2 0 2700000; L r ib; L r b; Z",
    ),
    ("flowChartDisplay", "path w=6 h=6; M 0 3; L 1 0; L 5 0; A 1 3 3cd4 cd2; L 1 6; Z"),
    (
        "flowChartInternalStorage",
        "path w=1 h=1; M 0 0; L 1 0; L 1 1; L 0 1; Z
         path w=8 h=8 fill=none; M 1 0; L 1 8; M 0 1; L 8 1",
    ),
    (
        "flowChartMultidocument",
        "path w=21600 h=21600
         M 0 20782; C 9298 23542 9298 18022 18595 18022; L 18595 3675; L 0 3675; Z
         M 1532 3675; L 1532 1815; L 20000 1815; L 20000 16252; C 19298 16252 18595 16352 18595 16352; L 18595 3675; Z
         M 2972 1815; L 2972 0; L 21600 0; L 21600 14392; C 20800 14392 20000 14467 20000 14467; L 20000 1815; Z",
    ),
    (
        "flowChartOfflineStorage",
        "path w=2 h=2; M 0 0; L 2 0; L 1 2; Z
         path w=5 h=5 fill=none; M 2 4; L 3 4",
    ),
    (
        "noSmoking",
        "av adj 18750
         gd a pin 0 adj 50000
         gd dr */ ss a 100000
         gd iwd2 +- wd2 0 dr
         gd ihd2 +- hd2 0 dr
         gd ix cos iwd2 2700000
         gd iy sin ihd2 2700000
         gd m */ dr 35355 100000
         gd x1 +- hc 0 ix
         gd x2 +- hc ix 0
         gd y1 +- vc 0 iy
         gd y2 +- vc iy 0
         gd ax +- x1 m 0
         gd ay +- y1 0 m
         gd bx +- x2 m 0
         gd by +- y2 0 m
         gd cx +- x2 0 m
         gd cy +- y2 m 0
         gd ex +- x1 0 m
         gd ey +- y1 m 0
         M l vc; A wd2 hd2 cd2 cd4; A wd2 hd2 3cd4 cd4; A wd2 hd2 0 cd4; A wd2 hd2 cd4 cd4; Z
         M dr vc; A iwd2 ihd2 cd2 -5400000; A iwd2 ihd2 cd4 -5400000; A iwd2 ihd2 0 -5400000; A iwd2 ihd2 3cd4 -5400000; Z
         M ax ay; L bx by; L cx cy; L ex ey; Z",
    ),
    (
        "halfFrame",
        "av adj1 33333; av adj2 33333
         gd maxAdj2 */ 100000 w ss
         gd a2 pin 0 adj2 maxAdj2
         gd x1 */ ss a2 100000
         gd g1 */ h x1 w
         gd g2 +- h 0 g1
         gd maxAdj1 */ 100000 g2 ss
         gd a1 pin 0 adj1 maxAdj1
         gd y1 */ ss a1 100000
         gd dx2 */ y1 w h
         gd x2 +- r 0 dx2
         gd dy2 */ x1 h w
         gd y2 +- b 0 dy2
         M l t; L r t; L x2 y1; L x1 y1; L x1 y2; L l b; Z",
    ),
    (
        "diagStripe",
        "av adj 50000
         gd a pin 0 adj 100000
         gd x2 */ w a 100000
         gd y2 */ h a 100000
         M l y2; L x2 t; L r t; L l b; Z",
    ),
    (
        "snip2DiagRect",
        "av adj1 0; av adj2 16667
         gd a1 pin 0 adj1 50000
         gd a2 pin 0 adj2 50000
         gd lx1 */ ss a1 100000
         gd lx2 +- r 0 lx1
         gd ly1 +- b 0 lx1
         gd rx1 */ ss a2 100000
         gd rx2 +- r 0 rx1
         gd ry1 +- b 0 rx1
         M lx1 t; L rx2 t; L r rx1; L r ly1; L lx2 b; L rx1 b; L l ry1; L l lx1; Z",
    ),
    (
        "snipRoundRect",
        "av adj1 16667; av adj2 16667
         gd a1 pin 0 adj1 50000
         gd a2 pin 0 adj2 50000
         gd x1 */ ss a1 100000
         gd dx2 */ ss a2 100000
         gd x2 +- r 0 dx2
         M x1 t; L x2 t; L r dx2; L r b; L l b; L l x1; A x1 x1 cd2 cd4; Z",
    ),
    (
        "round2DiagRect",
        "av adj1 16667; av adj2 0
         gd a1 pin 0 adj1 50000
         gd a2 pin 0 adj2 50000
         gd x1 */ ss a1 100000
         gd y1 +- b 0 x1
         gd s */ ss a2 100000
         gd x3 +- r 0 s
         M x1 t; L x3 t; A s s 3cd4 cd4; L r y1; A x1 x1 0 cd4; L s b; A s s cd4 cd4; L l x1; A x1 x1 cd2 cd4; Z",
    ),
    (
        "bevel",
        "av adj 12500
         gd a pin 0 adj 50000
         gd x1 */ ss a 100000
         gd x2 +- r 0 x1
         gd y2 +- b 0 x1
         path stroke=false; M x1 x1; L x2 x1; L x2 y2; L x1 y2; Z
         path fill=lightenLess stroke=false; M l t; L r t; L x2 x1; L x1 x1; Z
         path fill=darkenLess stroke=false; M l b; L x1 y2; L x2 y2; L r b; Z
         path fill=lighten stroke=false; M l t; L x1 x1; L x1 y2; L l b; Z
         path fill=darken stroke=false; M r t; L r b; L x2 y2; L x2 x1; Z
         path fill=none; M l t; L r t; L r b; L l b; Z; M x1 x1; L x2 x1; L x2 y2; L x1 y2; Z
         M l t; L x1 x1; M l b; L x1 y2; M r t; L x2 x1; M r b; L x2 y2",
    ),
    (
        "funnel",
        "gd ry */ h 1 10
         gd y1 +- t ry 0
         gd x1 */ w 2 5
         gd x2 */ w 3 5
         gd y3 */ h 3 5
         path; M l y1; L x1 y3; L x1 b; L x2 b; L x2 y3; L r y1; A wd2 ry 0 -10800000; Z
         path fill=darkenLess; M l y1; A wd2 ry cd2 -10800000; A wd2 ry 0 -10800000; Z",
    ),
    ("pieWedge", "M l b; A w h cd2 cd4; L r b; Z"),
    (
        "plaqueTabs",
        "gd md */ ss 1 10
         gd x2 +- r 0 md
         gd y2 +- b 0 md
         M l t; L md t; A md md 0 cd4; Z
         M r md; A md md cd4 cd4; L r t; Z
         M l y2; A md md 3cd4 cd4; L l b; Z
         M x2 b; A md md cd2 cd4; L r b; Z",
    ),
    (
        "squareTabs",
        "gd md */ ss 1 10
         gd x2 +- r 0 md
         gd y2 +- b 0 md
         M l t; L md t; L md md; L l md; Z
         M x2 t; L r t; L r md; L x2 md; Z
         M l y2; L md y2; L md b; L l b; Z
         M x2 y2; L r y2; L r b; L x2 b; Z",
    ),
    (
        "cornerTabs",
        "gd md */ ss 1 10
         gd x2 +- r 0 md
         gd y2 +- b 0 md
         M l t; L md t; L l md; Z
         M x2 t; L r t; L r md; Z
         M l y2; L md b; L l b; Z
         M r y2; L r b; L x2 b; Z",
    ),
    (
        "chartX",
        "path stroke=false; M l t; L r t; L r b; L l b; Z
         path fill=none; M l t; L r b; M l b; L r t",
    ),
    (
        "chartStar",
        "path stroke=false; M l t; L r t; L r b; L l b; Z
         path fill=none; M l t; L r b; M l b; L r t; M hc t; L hc b",
    ),
    (
        "chartPlus",
        "path stroke=false; M l t; L r t; L r b; L l b; Z
         path fill=none; M hc t; L hc b; M l vc; L r vc",
    ),
    ("lineInv", "path fill=none; M l b; L r t"),
    (
        "nonIsoscelesTrapezoid",
        "av adj1 25000; av adj2 25000
         gd maxAdj */ 50000 w ss
         gd a1 pin 0 adj1 maxAdj
         gd a2 pin 0 adj2 maxAdj
         gd x1 */ ss a1 100000
         gd dx3 */ ss a2 100000
         gd x3 +- r 0 dx3
         M l b; L x1 t; L x3 t; L r b; Z",
    ),
    (
        "leftBrace",
        "av adj1 8333; av adj2 50000
         gd a2 pin 0 adj2 100000
         gd q1 +- 100000 0 a2
         gd q2 min q1 a2
         gd q3 */ q2 1 2
         gd maxAdj1 */ q3 h ss
         gd a1 pin 0 adj1 maxAdj1
         gd y1 */ ss a1 100000
         gd y3 */ h a2 100000
         gd y4 +- b 0 y1
         gd y5 +- y3 y1 0
         path stroke=false; M r b; A wd2 y1 cd4 cd4; L hc y5; A wd2 y1 0 -5400000; A wd2 y1 cd4 -5400000; L hc y1; A wd2 y1 cd2 cd4; Z
         path fill=none; M r b; A wd2 y1 cd4 cd4; L hc y5; A wd2 y1 0 -5400000; A wd2 y1 cd4 -5400000; L hc y1; A wd2 y1 cd2 cd4",
    ),
    (
        "rightBrace",
        "av adj1 8333; av adj2 50000
         gd a2 pin 0 adj2 100000
         gd q1 +- 100000 0 a2
         gd q2 min q1 a2
         gd q3 */ q2 1 2
         gd maxAdj1 */ q3 h ss
         gd a1 pin 0 adj1 maxAdj1
         gd y1 */ ss a1 100000
         gd y3 */ h a2 100000
         gd y2 +- y3 0 y1
         gd y4 +- b 0 y1
         path stroke=false; M l t; A wd2 y1 3cd4 cd4; L hc y2; A wd2 y1 cd2 -5400000; A wd2 y1 3cd4 -5400000; L hc y4; A wd2 y1 0 cd4; Z
         path fill=none; M l t; A wd2 y1 3cd4 cd4; L hc y2; A wd2 y1 cd2 -5400000; A wd2 y1 3cd4 -5400000; L hc y4; A wd2 y1 0 cd4",
    ),
    (
        "bracePair",
        "av adj 8333
         gd a pin 0 adj 25000
         gd x1 */ ss a 100000
         gd x2 */ ss a 50000
         gd x3 +- r 0 x2
         gd x4 +- r 0 x1
         gd y2 +- vc 0 x1
         gd y3 +- vc x1 0
         gd y4 +- b 0 x1
         path fill=none
         M x2 b; A x1 x1 cd4 cd4; L x1 y3; A x1 x1 0 -5400000; A x1 x1 cd4 -5400000; L x1 x1; A x1 x1 cd2 cd4
         M x3 t; A x1 x1 3cd4 cd4; L x4 y2; A x1 x1 cd2 -5400000; A x1 x1 3cd4 -5400000; L x4 y4; A x1 x1 0 cd4",
    ),
    (
        "irregularSeal1",
        "path w=21600 h=21600
         M 10800 5800; L 14522 0; L 14155 5325; L 18380 4457; L 16702 7315; L 21097 8137; L 17607 10475
         L 21600 13290; L 16837 12942; L 18145 18095; L 14020 14457; L 13247 19737; L 10532 14935; L 8485 21600
         L 7715 15627; L 4762 17617; L 5667 13937; L 135 14587; L 3722 11775; L 0 8615; L 4627 7617; L 370 2295
         L 7312 6320; L 8352 2295; Z",
    ),
    (
        "irregularSeal2",
        "path w=21600 h=21600
         M 11462 4342; L 14790 0; L 14525 5777; L 18007 3172; L 16380 6532; L 21600 6645; L 16985 9402
         L 18270 11290; L 16380 12310; L 18877 15632; L 14640 14350; L 14942 17370; L 12180 15935; L 11612 18842
         L 9872 17370; L 8700 19712; L 7527 18125; L 4917 21600; L 4805 18240; L 1285 17825; L 3330 15370
         L 0 12877; L 3935 11592; L 1172 8270; L 5372 7817; L 4502 3625; L 8550 6382; L 9722 1887; Z",
    ),
    (
        "bentConnector4",
        "av adj1 50000; av adj2 50000
         gd x1 */ w adj1 100000
         gd y2 */ h adj2 100000
         path fill=none; M l t; L x1 t; L x1 y2; L r y2; L r b",
    ),
    (
        "bentConnector5",
        "av adj1 50000; av adj2 50000; av adj3 50000
         gd x1 */ w adj1 100000
         gd x3 */ w adj3 100000
         gd y2 */ h adj2 100000
         path fill=none; M l t; L x1 t; L x1 y2; L x3 y2; L x3 b; L r b",
    ),
    ("curvedConnector2", "path fill=none; M l t; C wd2 t r hd2 r b"),
    (
        "curvedConnector4",
        "av adj1 50000; av adj2 50000
         gd x2 */ w adj1 100000
         gd x1 +/ l x2 2
         gd x3 +/ r x2 2
         gd x4 +/ x2 x3 2
         gd x5 +/ x3 r 2
         gd y4 */ h adj2 100000
         gd y1 +/ t y4 2
         gd y2 +/ t y1 2
         gd y3 +/ y1 y4 2
         gd y5 +/ b y4 2
         path fill=none; M l t; C x1 t x2 y2 x2 y1; C x2 y3 x4 y4 x3 y4; C x5 y4 r y5 r b",
    ),
    (
        "curvedConnector5",
        "av adj1 50000; av adj2 50000; av adj3 50000
         gd x3 */ w adj1 100000
         gd x6 */ w adj3 100000
         gd x1 +/ x3 x6 2
         gd x2 +/ l x3 2
         gd x4 +/ x3 x1 2
         gd x5 +/ x6 x1 2
         gd x7 +/ x6 r 2
         gd y4 */ h adj2 100000
         gd y1 +/ t y4 2
         gd y2 +/ t y1 2
         gd y3 +/ y1 y4 2
         gd y5 +/ b y4 2
         gd y6 +/ y5 y4 2
         gd y7 +/ y5 b 2
         path fill=none; M l t; C x2 t x3 y2 x3 y1; C x3 y3 x4 y4 x1 y4; C x5 y4 x6 y6 x6 y5; C x6 y7 x7 b r b",
    ),
];

/// Stars: point count and default inner radius adjustment.
const STARS: &[(&str, u32, i64)] = &[
    ("star7", 7, 34601),
    ("star8", 8, 38250),
    ("star10", 10, 42533),
    ("star12", 12, 37500),
    ("star16", 16, 37500),
    ("star24", 24, 37500),
    ("star32", 32, 37500),
];

/// Regular polygons: side count and angle of the first vertex.
const POLYGONS: &[(&str, u32, i64)] = &[("decagon", 10, 10_800_000), ("dodecagon", 12, 900_000)];

/// Gears: tooth count and default tooth depth adjustment.
const GEARS: &[(&str, u32, i64)] = &[("gear6", 6, 15000), ("gear9", 9, 10000)];

/// Line callouts: leader point count, bordered, accent bar.
const LINE_CALLOUTS: &[(&str, usize, bool, bool)] = &[
    ("callout1", 1, false, false),
    ("callout2", 2, false, false),
    ("callout3", 3, false, false),
    ("borderCallout1", 1, true, false),
    ("borderCallout2", 2, true, false),
    ("borderCallout3", 3, true, false),
    ("accentCallout1", 1, false, true),
    ("accentCallout2", 2, false, true),
    ("accentCallout3", 3, false, true),
    ("accentBorderCallout1", 1, true, true),
    ("accentBorderCallout2", 2, true, true),
    ("accentBorderCallout3", 3, true, true),
];

/// Action button icons on an 8x8 grid (`qxN`/`qyN`) centered in the button.
const ACTION_BUTTONS: &[(&str, &str)] = &[
    ("actionButtonBlank", ""),
    (
        "actionButtonHome",
        "path fill=darken; M qx4 qy1; L qx7 qy4; L qx6 qy4; L qx6 qy7; L qx2 qy7; L qx2 qy4; L qx1 qy4; Z",
    ),
    (
        "actionButtonHelp",
        "path fill=darken; M qx2 qy1; L qx6 qy1; L qx6 qy4; L qx5 qy4; L qx5 qy5; L qx3 qy5; L qx3 qy3; L qx4 qy3
         L qx4 qy2; L qx2 qy2; Z; M qx3 qy6; L qx5 qy6; L qx5 qy7; L qx3 qy7; Z",
    ),
    (
        "actionButtonInformation",
        "path fill=darken; M qx0 qy4; A hq hq cd2 cd4; A hq hq 3cd4 cd4; A hq hq 0 cd4; A hq hq cd4 cd4; Z
         path fill=lighten; M qx3 qy2; L qx5 qy2; L qx5 qy3; L qx3 qy3; Z; M qx3 qy4; L qx5 qy4; L qx5 qy7; L qx3 qy7; Z",
    ),
    ("actionButtonForwardNext", "path fill=darken; M qx2 qy1; L qx7 qy4; L qx2 qy7; Z"),
    ("actionButtonBackPrevious", "path fill=darken; M qx6 qy1; L qx6 qy7; L qx1 qy4; Z"),
    (
        "actionButtonEnd",
        "path fill=darken; M qx1 qy1; L qx5 qy4; L qx1 qy7; Z; M qx6 qy1; L qx7 qy1; L qx7 qy7; L qx6 qy7; Z",
    ),
    (
        "actionButtonBeginning",
        "path fill=darken; M qx7 qy1; L qx7 qy7; L qx3 qy4; Z; M qx1 qy1; L qx2 qy1; L qx2 qy7; L qx1 qy7; Z",
    ),
    (
        "actionButtonReturn",
        "path fill=darken; M qx1 qy3; L qx3 qy1; L qx3 qy2; L qx7 qy2; L qx7 qy7; L qx5 qy7; L qx5 qy4; L qx3 qy4
         L qx3 qy5; Z",
    ),
    (
        "actionButtonDocument",
        "path fill=darken; M qx2 qy1; L qx5 qy1; L qx6 qy2; L qx6 qy7; L qx2 qy7; Z",
    ),
    (
        "actionButtonSound",
        "path fill=darken; M qx1 qy3; L qx3 qy3; L qx5 qy1; L qx5 qy7; L qx3 qy5; L qx1 qy5; Z
         path fill=none; M qx6 qy3; L qx7 qy2; M qx6 qy4; L qx8 qy4; M qx6 qy5; L qx7 qy6",
    ),
    (
        "actionButtonMovie",
        "path fill=darken; M qx1 qy2; L qx5 qy2; L qx5 qy3; L qx7 qy2; L qx7 qy6; L qx5 qy5; L qx5 qy6; L qx1 qy6; Z",
    ),
];

/// Ellipse point at `angle` on radii `rx`/`ry`, named `x{id}`/`y{id}`.
fn polar_guides(src: &mut String, id: u32, rx: &str, ry: &str, angle: i64) {
    src.push_str(&format!(
        "gd dx{id} cos {rx} {angle}\ngd dy{id} sin {ry} {angle}\ngd x{id} +- hc dx{id} 0\ngd y{id} +- vc dy{id} 0\n"
    ));
}

fn outline(src: &mut String, points: u32) {
    let path: Vec<String> = (0..points)
        .map(|k| format!("{} x{k} y{k}", if k == 0 { "M" } else { "L" }))
        .collect();
    src.push_str(&path.join("; "));
    src.push_str("; Z");
}

fn star(points: u32, adj: i64) -> String {
    let mut src = format!(
        "av adj {adj}\ngd a pin 0 adj 50000\ngd iwd2 */ wd2 a 50000\ngd ihd2 */ hd2 a 50000\n"
    );
    let vertices = 2 * points;
    for k in 0..vertices {
        let angle = 16_200_000 + i64::from(k) * 21_600_000 / i64::from(vertices);
        let (rx, ry) = if k % 2 == 0 { ("wd2", "hd2") } else { ("iwd2", "ihd2") };
        polar_guides(&mut src, k, rx, ry, angle);
    }
    outline(&mut src, vertices);
    src
}

fn polygon(sides: u32, start: i64) -> String {
    let mut src = String::new();
    for k in 0..sides {
        let angle = start + i64::from(k) * 21_600_000 / i64::from(sides);
        polar_guides(&mut src, k, "wd2", "hd2", angle);
    }
    outline(&mut src, sides);
    src
}

/// Teeth are trapezoids between the root ellipse and the bounding ellipse.
fn gear(teeth: u32, adj: i64) -> String {
    let mut src = format!(
        "av adj1 {adj}\ngd a1 pin 0 adj1 20000\ngd th */ ss a1 100000\n\
         gd iwd2 +- wd2 0 th\ngd ihd2 +- hd2 0 th\n"
    );
    let period = 21_600_000 / i64::from(teeth);
    let mut id = 0;
    for i in 0..teeth {
        let center = 16_200_000 + i64::from(i) * period;
        for (offset, outer) in [(-35, false), (-20, true), (20, true), (35, false)] {
            let (rx, ry) = if outer { ("wd2", "hd2") } else { ("iwd2", "ihd2") };
            polar_guides(&mut src, id, rx, ry, center + period * offset / 100);
            id += 1;
        }
    }
    outline(&mut src, id);
    src
}

fn sun() -> String {
    let mut src = String::from(
        "av adj 25000\ngd a pin 12500 adj 46875\ngd g0 +- 50000 0 a\n\
         gd cwd2 */ wd2 g0 50000\ngd chd2 */ hd2 g0 50000\ngd cl +- hc 0 cwd2\n\
         gd gw +- wd2 0 cwd2\ngd gh +- hd2 0 chd2\ngd bw */ gw 1 4\ngd bh */ gh 1 4\n\
         gd bwd2 +- cwd2 bw 0\ngd bhd2 +- chd2 bh 0\n",
    );
    let mut rays = Vec::new();
    for k in 0..8 {
        let angle = i64::from(k) * 2_700_000;
        let id = 3 * k;
        polar_guides(&mut src, id, "bwd2", "bhd2", angle - 600_000);
        polar_guides(&mut src, id + 1, "wd2", "hd2", angle);
        polar_guides(&mut src, id + 2, "bwd2", "bhd2", angle + 600_000);
        rays.push(format!(
            "M x{id} y{id}; L x{} y{}; L x{} y{}; Z",
            id + 1,
            id + 1,
            id + 2,
            id + 2
        ));
    }
    src.push_str(
        "M cl vc; A cwd2 chd2 cd2 cd4; A cwd2 chd2 3cd4 cd4; A cwd2 chd2 0 cd4; A cwd2 chd2 cd4 cd4; Z\n",
    );
    src.push_str(&rays.join("\n"));
    src
}

fn line_callout(points: usize, border: bool, accent: bool) -> String {
    let adj: &[i64] = match points {
        1 => &[18750, -8333, 112500, -38333],
        2 => &[18750, -8333, 18750, -16667, 112500, -46667],
        _ => &[18750, -8333, 18750, -16667, 100000, -16667, 112963, -8333],
    };
    let mut src = String::new();
    for (i, value) in adj.iter().enumerate() {
        src.push_str(&format!("av adj{} {value}\n", i + 1));
    }
    for p in 0..points + 1 {
        src.push_str(&format!(
            "gd y{p} */ h adj{} 100000\ngd x{p} */ w adj{} 100000\n",
            2 * p + 1,
            2 * p + 2
        ));
    }
    let frame = if border { "path" } else { "path stroke=false" };
    src.push_str(&format!("{frame}; M l t; L r t; L r b; L l b; Z\n"));
    if accent {
        src.push_str("path fill=none; M x0 t; L x0 b\n");
    }
    let leader: Vec<String> = (0..=points)
        .map(|p| format!("{} x{p} y{p}", if p == 0 { "M" } else { "L" }))
        .collect();
    src.push_str(&format!("path fill=none; {}", leader.join("; ")));
    src
}

fn action_button(icon: &str) -> String {
    let mut src = String::from("gd dq */ ss 3 4\ngd hq */ dq 1 2\ngd qs */ dq 1 8\ngd ql +- hc 0 hq\ngd qt +- vc 0 hq\n");
    for k in 0..=8 {
        src.push_str(&format!("gd qd{k} */ qs {k} 1\ngd qx{k} +- ql qd{k} 0\ngd qy{k} +- qt qd{k} 0\n"));
    }
    src.push_str("path; M l t; L r t; L r b; L l b; Z\n");
    src.push_str(icon);
    src
}

fn parse_template(name: &str, src: &str) -> Geometry {
    let mut geometry = Geometry::default();
    for statement in src.split(['\n', ';']) {
        let tokens: Vec<&str> = statement.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            continue;
        };
        let point = |i: usize| Point {
            x: args.get(i).copied().unwrap_or("0").to_string(),
            y: args.get(i + 1).copied().unwrap_or("0").to_string(),
        };
        let segment = match keyword {
            "av" | "gd" => {
                let Some((&guide, formula)) = args.split_first() else {
                    log::warn!("preset {name}: empty guide");
                    continue;
                };
                let formula = if keyword == "av" {
                    format!("val {}", formula.join(" "))
                } else {
                    formula.join(" ")
                };
                let list = if keyword == "av" {
                    &mut geometry.av_lst
                } else {
                    &mut geometry.gd_lst
                };
                list.push(Guide {
                    name: guide.to_string(),
                    formula,
                });
                continue;
            }
            "path" => {
                let mut path = Path {
                    stroke: true,
                    ..Default::default()
                };
                for option in args {
                    match option.split_once('=') {
                        Some(("w", v)) => path.w = v.parse().ok(),
                        Some(("h", v)) => path.h = v.parse().ok(),
                        Some(("fill", v)) => path.fill = PathFill::parse(v),
                        Some(("stroke", v)) => path.stroke = v != "false",
                        _ => log::warn!("preset {name}: bad path option {option:?}"),
                    }
                }
                geometry.path_lst.push(path);
                continue;
            }
            "M" => Segment::MoveTo(point(0)),
            "L" => Segment::LineTo(point(0)),
            "Q" => Segment::QuadBezTo((0..args.len()).step_by(2).map(point).collect()),
            "C" => Segment::CubicBezTo((0..args.len()).step_by(2).map(point).collect()),
            "A" => Segment::ArcTo {
                w_r: point(0).x,
                h_r: point(0).y,
                st_ang: point(2).x,
                sw_ang: point(2).y,
            },
            "Z" => Segment::Close,
            other => {
                log::warn!("preset {name}: unknown statement {other:?}");
                continue;
            }
        };
        if geometry.path_lst.is_empty() {
            geometry.path_lst.push(Path {
                stroke: true,
                ..Default::default()
            });
        }
        if let Some(path) = geometry.path_lst.last_mut() {
            path.segments.push(segment);
        }
    }
    geometry
}

fn library() -> &'static HashMap<&'static str, Geometry> {
    static LIBRARY: OnceLock<HashMap<&'static str, Geometry>> = OnceLock::new();
    LIBRARY.get_or_init(|| {
        let mut library: HashMap<&'static str, Geometry> = PRESETS
            .iter()
            .map(|(name, src)| (*name, parse_template(name, src)))
            .collect();
        let generated = STARS
            .iter()
            .map(|&(name, points, adj)| (name, star(points, adj)))
            .chain(POLYGONS.iter().map(|&(name, sides, start)| (name, polygon(sides, start))))
            .chain(GEARS.iter().map(|&(name, teeth, adj)| (name, gear(teeth, adj))))
            .chain(std::iter::once(("sun", sun())))
            .chain(
                LINE_CALLOUTS
                    .iter()
                    .map(|&(name, points, border, accent)| (name, line_callout(points, border, accent))),
            )
            .chain(ACTION_BUTTONS.iter().map(|&(name, icon)| (name, action_button(icon))));
        for (name, src) in generated {
            library.insert(name, parse_template(name, &src));
        }
        library
    })
}

/// Look up a preset geometry by its `prst` name.
pub fn preset(name: &str) -> Option<&'static Geometry> {
    library().get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_has_a_path() {
        for (name, geometry) in library() {
            assert!(!geometry.path_lst.is_empty(), "{name}");
            assert!(
                geometry.path_lst.iter().all(|p| !p.segments.is_empty()),
                "{name}"
            );
        }
    }

    #[test]
    fn template_statements() {
        let g = parse_template("t", "av adj 5; gd x */ w adj 10\npath w=4 fill=none stroke=false; M 0 0; Q 1 1 2 2; Z");
        assert_eq!(g.av_lst[0].formula, "val 5");
        assert_eq!(g.gd_lst[0].formula, "*/ w adj 10");
        let path = &g.path_lst[0];
        assert_eq!(path.w, Some(4.0));
        assert_eq!(path.fill, PathFill::None);
        assert!(!path.stroke);
        assert_eq!(path.segments.len(), 3);
    }

    #[test]
    fn catalog_covers_the_standard_families() {
        assert!(library().len() >= 180, "{}", library().len());
        for name in [
            "star10",
            "star32",
            "wave",
            "cloud",
            "smileyFace",
            "wedgeRoundRectCallout",
            "blockArc",
            "circularArrow",
            "sun",
            "moon",
            "mathPlus",
            "decagon",
            "gear6",
            "borderCallout2",
            "actionButtonHome",
            "flowChartMagneticDisk",
        ] {
            assert!(preset(name).is_some(), "{name}");
        }
    }

    #[test]
    fn generated_star_alternates_radii() {
        let g = preset("star8").unwrap();
        let segments = &g.path_lst[0].segments;
        // 16 vertices plus the close.
        assert_eq!(segments.len(), 17);
        assert!(g.gd_lst.iter().any(|gd| gd.name == "iwd2"));
        assert!(g.gd_lst.iter().any(|gd| gd.name == "x15"));
    }

    #[test]
    fn line_callout_leader_follows_adjustments() {
        let g = preset("accentBorderCallout2").unwrap();
        assert_eq!(g.av_lst.len(), 6);
        assert_eq!(g.path_lst.len(), 3);
        assert!(g.path_lst[0].stroke);
        let leader = g.path_lst.last().unwrap();
        assert_eq!(leader.fill, PathFill::None);
        assert_eq!(leader.segments.len(), 3);
        assert!(!preset("callout1").unwrap().path_lst[0].stroke);
    }
}

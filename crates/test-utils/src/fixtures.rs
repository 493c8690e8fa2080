//! Inline data fixtures shared across crate tests.

/// A ten-school roster with Golestan-area coordinates and Persian grade
/// levels and genders.
pub const SAMPLE_ROSTER_CSV: &str = "\
school_id,name,principal,grade_level,students,teachers,gender,latitude,longitude
100013,دبستان شهدای گمنام,م.رحیمی,دبستان دوره دوم,415,29,مختلط,37.3321,54.5103
100014,متوسطه اندیشه,ن.صادقی,متوسطه اول,490,31,پسرانه,37.3105,54.4552
100015,فنی خوارزمی,ج.مرادی,فنی و حرفه‌ای,280,30,مختلط,37.2889,54.5408
100016,دبستان آزادی,ف.نظری,دبستان دوره اول,350,24,دخترانه,37.3450,54.4901
100017,متوسطه فردوسی,ع.حیدری,متوسطه دوم,520,34,پسرانه,37.2995,54.4253
100018,پیش‌دبستانی شکوفه,ز.مرادخانی,پیش دبستانی,150,12,دخترانه,37.3012,54.5005
100019,مرکز مشاوران ۱,ا.اسدی,مراکز مشاوره,0,18,مختلط,37.3208,54.4852
100020,دبستان فجر,م.جعفری,دبستان دوره دوم,390,26,پسرانه,37.3155,54.5303
100021,متوسطه الزهرا,س.کریمی,متوسطه دوم,470,30,دخترانه,37.2770,54.4601
100022,دبستان هدف,ج.نوری,دبستان دوره اول,330,23,مختلط,37.3050,54.4050
";

/// A flood-extent style FeatureCollection covering the eastern half of the
/// sample roster (longitudes >= 54.47, latitudes 37.25..37.40).
pub const EAST_ZONE_GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"event": "ST20190329 flood water"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [54.47, 37.25],
                    [54.60, 37.25],
                    [54.60, 37.40],
                    [54.47, 37.40],
                    [54.47, 37.25]
                ]]
            }
        }
    ]
}"#;

/// WKT zone equivalent to a hand-drawn rectangle over the western schools.
pub const WEST_ZONE_WKT: &str =
    "POLYGON((54.38 37.25, 54.47 37.25, 54.47 37.40, 54.38 37.40, 54.38 37.25))";

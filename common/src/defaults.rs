//! 初期データ
//!
//! localStorage が空のときに使う6枚と、バナー用の3枚。

use crate::types::{CarouselPhoto, Photo};

const DEFAULT_PHOTOS: [(i64, &str, &str, &str, u32); 6] = [
    (
        1,
        "晨光",
        "清晨的第一縷陽光",
        "https://images.unsplash.com/photo-1506744038136-46273834b3fb",
        128,
    ),
    (
        2,
        "山間小路",
        "寧靜的山間小徑",
        "https://images.unsplash.com/photo-1501854140801-50d01698950b",
        95,
    ),
    (
        3,
        "海邊日落",
        "浪漫的海邊日落時分",
        "https://images.unsplash.com/photo-1507525428034-b723cf961d3e",
        156,
    ),
    (
        4,
        "城市夜景",
        "繁華都市的璀璨燈火",
        "https://images.unsplash.com/photo-1519501025264-65ba15a82390",
        203,
    ),
    (
        5,
        "雪山之巔",
        "白雪皚皚的山峰",
        "https://images.unsplash.com/photo-1454496522488-7a8e488e8606",
        178,
    ),
    (
        6,
        "沙漠綠洲",
        "沙漠中的生命奇跡",
        "https://images.unsplash.com/photo-1509316785289-025f5b846b35",
        145,
    ),
];

pub const CAROUSEL_PHOTOS: [CarouselPhoto; 3] = [
    CarouselPhoto {
        id: 1,
        title: "倫敦街景",
        description: "英國倫敦的街頭風光，展現城市的歷史與現代交融。",
        image: "https://images.unsplash.com/photo-1467269204594-9661b134dd2b",
    },
    CarouselPhoto {
        id: 2,
        title: "山巒薄霧",
        description: "山巒間的晨霧與雲海，營造出夢幻的自然景色。",
        image: "https://images.unsplash.com/photo-1500534314209-a25ddb2bd429",
    },
    CarouselPhoto {
        id: 3,
        title: "舊金山金門大橋",
        description: "美國最具代表性的地標之一，橫跨金門海峽的壯觀吊橋。",
        image: "https://images.unsplash.com/photo-1501594907352-04cda38ebc29",
    },
];

/// 初期表示の写真6枚
pub fn default_photos() -> Vec<Photo> {
    DEFAULT_PHOTOS
        .iter()
        .map(|&(id, title, description, image, likes)| Photo {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            likes,
            is_liked: false,
        })
        .collect()
}

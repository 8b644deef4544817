// src/stars/roster.rs

/// One subject of the star fun-facts series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Star {
    pub num: u32,
    pub name: &'static str,
    pub name_short: &'static str,
    pub title: &'static str,
    /// NBA headshot id, also used as the picsum fallback seed.
    pub image_id: &'static str,
    pub related: [u32; 3],
}

pub const STARS: [Star; 12] = [
    Star { num: 1, name: "Michael Jordan", name_short: "Jordan", title: "Jordan Set the Lowest Score in Three-Point Contest History", image_id: "893", related: [2, 11, 10] },
    Star { num: 2, name: "LeBron James", name_short: "LeBron", title: "LeBron Spends Millions of Dollars Annually on Body Maintenance", image_id: "2544", related: [1, 3, 11] },
    Star { num: 3, name: "Kareem Abdul-Jabbar", name_short: "Abdul-Jabbar", title: "Abdul-Jabbar is the NBA's All-Time Scoring Leader but Never Won a Dunk Contest", image_id: "76003", related: [4, 2, 6] },
    Star { num: 4, name: "Magic Johnson", name_short: "Magic", title: "Magic Won the NBA Championship and Finals MVP at Age 20", image_id: "77142", related: [3, 9, 5] },
    Star { num: 5, name: "Bill Russell", name_short: "Russell", title: "Russell Has 11 Championship Rings but Never Won a Scoring Title", image_id: "78049", related: [6, 4, 9] },
    Star { num: 6, name: "Wilt Chamberlain", name_short: "Chamberlain", title: "Chamberlain's 100-Point Game Was Actually Played in a Small Arena", image_id: "76375", related: [5, 3, 12] },
    Star { num: 7, name: "Tim Duncan", name_short: "Duncan", title: "Duncan Was Ejected for Laughing on the Bench", image_id: "1495", related: [8, 11, 10] },
    Star { num: 8, name: "Shaquille O'Neal", name_short: "O'Neal", title: "O'Neal Released Rap Albums", image_id: "406", related: [7, 11, 12] },
    Star { num: 9, name: "Larry Bird", name_short: "Bird", title: "Bird is the Only Player to Win Both Preseason MVP and Finals MVP", image_id: "1449", related: [4, 5, 1] },
    Star { num: 10, name: "Stephen Curry", name_short: "Curry", title: "Curry's Shooting Form Was Once Criticized", image_id: "201939", related: [11, 1, 7] },
    Star { num: 11, name: "Kobe Bryant", name_short: "Kobe", title: "Kobe's First and Last NBA Points Were Both Free Throws", image_id: "977", related: [1, 2, 8] },
    Star { num: 12, name: "Hakeem Olajuwon", name_short: "Olajuwon", title: "Olajuwon Was the First International No. 1 Overall Pick in NBA History", image_id: "165", related: [6, 8, 3] },
];

pub fn by_num(num: u32) -> Option<&'static Star> {
    STARS.iter().find(|s| s.num == num)
}

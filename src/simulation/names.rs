//! Name pools and unique name allocation

use super::error::{InvasionError, Result};
use super::random::RandomSource;

/// Names available for generated cities
///
/// The pool size also caps how many cells a generated grid may have.
pub const CITY_NAMES: &[&str] = &[
    "Canandaigua", "PaintedHills", "Eschbach", "Saybrook", "Hahira", "Oostburg", "Kappa",
    "GranvilleSouth", "Manahawkin", "LeRaysville", "RanchoMirage", "Zena", "Manhattan",
    "Wildomar", "Burnettsville", "Protivin", "Pioneer", "Whitakers", "GrandMound",
    "Greilickville", "Kipton", "Sedan", "Edinburg", "Antelope", "Tecumseh", "ConesusHamlet",
    "LakeCassidy", "Zelienople", "LeadvilleNorth", "MapleHeights", "Syosset",
    "SixShooterCanyon", "Gonvick", "Westmont", "AltoBonitoHeights", "Abeytas", "Herington",
    "Fulford", "Fairgarden", "ArrowheadSprings", "ElkHorn", "MorroBay", "RockCity", "Alamo",
    "ClearviewAcres", "JAARS", "Taunton", "Funkley", "BessemerBend", "RiverRidge", "Yadao",
    "Dagangjiu", "HongpanXiang", "Jincun", "Ganbao", "Dahuang", "Yecitang", "Sanxingzhen",
    "Xinzhuangcun", "Donghuanglou", "Xiaojiaao", "Qiaodong", "Yangqiaocun", "Dawan",
    "Shengdianzhuang", "Ludazhuang", "Langdaling", "Minzhu", "Mirantarium", "Jishui",
    "Maidigou", "Lengshuiwan", "Fuche", "Bamian", "Guanyinmiao", "Shuangpeixia", "Dushanwu",
    "Baiyang", "Daoziba", "FujiaBeigou", "Ganzhou", "Xishan", "Dabali", "Maykhutu",
    "Huakengwu", "Miaobei", "Shangyang", "Xiaoqiao", "Huangyaoguan", "Tongziwo", "Wutongmiao",
    "Huangtuling", "Xintan", "Ziyipu", "Xizhuangtou", "Tongjunzhuang", "Loufanggou",
    "Zhengzhuang", "Peitaiho", "Hengkeng",
];

/// Names available for invading aliens
pub const ALIEN_NAMES: &[&str] = &[
    "Yalmimin", "Raxomalik", "Degir", "Cfuujaban", "Borger", "Oleniflax", "Vuludha",
    "NeFlav Yucholl", "Mane", "Nbaaana", "Ruavu Strogonar", "Araime Fallapadax",
    "Proog Wontwoon", "Salah", "Ndidi", "Olgsivoor", "Ghuyot", "Kragitur", "Zumbal", "Zidane",
    "Luvendav", "Tamer", "Ruavu", "Ofnatsuza", "Cleayomaar",
];

/// Picks `count` distinct names from `pool`
///
/// The names come out in the order of a fresh permutation of pool indices,
/// truncated to `count`.
pub fn allocate_names<R: RandomSource>(
    rng: &mut R,
    pool: &[&str],
    count: usize,
) -> Result<Vec<String>> {
    if count > pool.len() {
        return Err(InvasionError::RequestTooLarge {
            requested: count,
            available: pool.len(),
        });
    }

    let names = rng
        .generate_permutation(pool.len())
        .into_iter()
        .take(count)
        .filter_map(|index| pool.get(index))
        .map(|name| name.to_string())
        .collect();
    Ok(names)
}

/// Picks `count` city names from [`CITY_NAMES`]
pub fn allocate_city_names<R: RandomSource>(rng: &mut R, count: usize) -> Result<Vec<String>> {
    allocate_names(rng, CITY_NAMES, count)
}

/// Picks `count` alien names from [`ALIEN_NAMES`]
pub fn allocate_alien_names<R: RandomSource>(rng: &mut R, count: usize) -> Result<Vec<String>> {
    allocate_names(rng, ALIEN_NAMES, count)
}

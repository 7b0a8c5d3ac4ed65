//! Digitized reference strokes for the default template set.

use crate::float_types::Real;

pub(super) const TRIANGLE: &[[Real; 2]] = &[
    [137.0, 139.0], [135.0, 141.0], [133.0, 144.0], [132.0, 146.0], [130.0, 149.0], [128.0, 151.0], [126.0, 155.0], [123.0, 160.0],
    [120.0, 166.0], [116.0, 171.0], [112.0, 177.0], [107.0, 183.0], [102.0, 188.0], [100.0, 191.0], [95.0, 195.0], [90.0, 199.0],
    [86.0, 203.0], [82.0, 206.0], [80.0, 209.0], [75.0, 213.0], [73.0, 213.0], [70.0, 216.0], [67.0, 219.0], [64.0, 221.0],
    [61.0, 223.0], [60.0, 225.0], [62.0, 226.0], [65.0, 225.0], [67.0, 226.0], [74.0, 226.0], [77.0, 227.0], [85.0, 229.0],
    [91.0, 230.0], [99.0, 231.0], [108.0, 232.0], [116.0, 233.0], [125.0, 233.0], [134.0, 234.0], [145.0, 233.0], [153.0, 232.0],
    [160.0, 233.0], [170.0, 234.0], [177.0, 235.0], [179.0, 236.0], [186.0, 237.0], [193.0, 238.0], [198.0, 239.0], [200.0, 237.0],
    [202.0, 239.0], [204.0, 238.0], [206.0, 234.0], [205.0, 230.0], [202.0, 222.0], [197.0, 216.0], [192.0, 207.0], [186.0, 198.0],
    [179.0, 189.0], [174.0, 183.0], [170.0, 178.0], [164.0, 171.0], [161.0, 168.0], [154.0, 160.0], [148.0, 155.0], [143.0, 150.0],
    [138.0, 148.0], [136.0, 148.0],
];

pub(super) const X: &[[Real; 2]] = &[
    [87.0, 142.0], [89.0, 145.0], [91.0, 148.0], [93.0, 151.0], [96.0, 155.0], [98.0, 157.0], [100.0, 160.0], [102.0, 162.0],
    [106.0, 167.0], [108.0, 169.0], [110.0, 171.0], [115.0, 177.0], [119.0, 183.0], [123.0, 189.0], [127.0, 193.0], [129.0, 196.0],
    [133.0, 200.0], [137.0, 206.0], [140.0, 209.0], [143.0, 212.0], [146.0, 215.0], [151.0, 220.0], [153.0, 222.0], [155.0, 223.0],
    [157.0, 225.0], [158.0, 223.0], [157.0, 218.0], [155.0, 211.0], [154.0, 208.0], [152.0, 200.0], [150.0, 189.0], [148.0, 179.0],
    [147.0, 170.0], [147.0, 158.0], [147.0, 148.0], [147.0, 141.0], [147.0, 136.0], [144.0, 135.0], [142.0, 137.0], [140.0, 139.0],
    [135.0, 145.0], [131.0, 152.0], [124.0, 163.0], [116.0, 177.0], [108.0, 191.0], [100.0, 206.0], [94.0, 217.0], [91.0, 222.0],
    [89.0, 225.0], [87.0, 226.0], [87.0, 224.0],
];

pub(super) const RECTANGLE: &[[Real; 2]] = &[
    [78.0, 149.0], [78.0, 153.0], [78.0, 157.0], [78.0, 160.0], [79.0, 162.0], [79.0, 164.0], [79.0, 167.0], [79.0, 169.0],
    [79.0, 173.0], [79.0, 178.0], [79.0, 183.0], [80.0, 189.0], [80.0, 193.0], [80.0, 198.0], [80.0, 202.0], [81.0, 208.0],
    [81.0, 210.0], [81.0, 216.0], [82.0, 222.0], [82.0, 224.0], [82.0, 227.0], [83.0, 229.0], [83.0, 231.0], [85.0, 230.0],
    [88.0, 232.0], [90.0, 233.0], [92.0, 232.0], [94.0, 233.0], [99.0, 232.0], [102.0, 233.0], [106.0, 233.0], [109.0, 234.0],
    [117.0, 235.0], [123.0, 236.0], [126.0, 236.0], [135.0, 237.0], [142.0, 238.0], [145.0, 238.0], [152.0, 238.0], [154.0, 239.0],
    [165.0, 238.0], [174.0, 237.0], [179.0, 236.0], [186.0, 235.0], [191.0, 235.0], [195.0, 233.0], [197.0, 233.0], [200.0, 233.0],
    [201.0, 235.0], [201.0, 233.0], [199.0, 231.0], [198.0, 226.0], [198.0, 220.0], [196.0, 207.0], [195.0, 195.0], [195.0, 181.0],
    [195.0, 173.0], [195.0, 163.0], [194.0, 155.0], [192.0, 145.0], [192.0, 143.0], [192.0, 138.0], [191.0, 135.0], [191.0, 133.0],
    [191.0, 130.0], [190.0, 128.0], [188.0, 129.0], [186.0, 129.0], [181.0, 132.0], [173.0, 131.0], [162.0, 131.0], [151.0, 132.0],
    [149.0, 132.0], [138.0, 132.0], [136.0, 132.0], [122.0, 131.0], [120.0, 131.0], [109.0, 130.0], [107.0, 130.0], [90.0, 132.0],
    [81.0, 133.0], [76.0, 133.0],
];

pub(super) const CIRCLE: &[[Real; 2]] = &[
    [127.0, 141.0], [124.0, 140.0], [120.0, 139.0], [118.0, 139.0], [116.0, 139.0], [111.0, 140.0], [109.0, 141.0], [104.0, 144.0],
    [100.0, 147.0], [96.0, 152.0], [93.0, 157.0], [90.0, 163.0], [87.0, 169.0], [85.0, 175.0], [83.0, 181.0], [82.0, 190.0],
    [82.0, 195.0], [83.0, 200.0], [84.0, 205.0], [88.0, 213.0], [91.0, 216.0], [96.0, 219.0], [103.0, 222.0], [108.0, 224.0],
    [111.0, 224.0], [120.0, 224.0], [133.0, 223.0], [142.0, 222.0], [152.0, 218.0], [160.0, 214.0], [167.0, 210.0], [173.0, 204.0],
    [178.0, 198.0], [179.0, 196.0], [182.0, 188.0], [182.0, 177.0], [178.0, 167.0], [170.0, 150.0], [163.0, 138.0], [152.0, 130.0],
    [143.0, 129.0], [140.0, 131.0], [129.0, 136.0], [126.0, 139.0],
];

pub(super) const CHECK: &[[Real; 2]] = &[
    [91.0, 185.0], [93.0, 185.0], [95.0, 185.0], [97.0, 185.0], [100.0, 188.0], [102.0, 189.0], [104.0, 190.0], [106.0, 193.0],
    [108.0, 195.0], [110.0, 198.0], [112.0, 201.0], [114.0, 204.0], [115.0, 207.0], [117.0, 210.0], [118.0, 212.0], [120.0, 214.0],
    [121.0, 217.0], [122.0, 219.0], [123.0, 222.0], [124.0, 224.0], [126.0, 226.0], [127.0, 229.0], [129.0, 231.0], [130.0, 233.0],
    [129.0, 231.0], [129.0, 228.0], [129.0, 226.0], [129.0, 224.0], [129.0, 221.0], [129.0, 218.0], [129.0, 212.0], [129.0, 208.0],
    [130.0, 198.0], [132.0, 189.0], [134.0, 182.0], [137.0, 173.0], [143.0, 164.0], [147.0, 157.0], [151.0, 151.0], [155.0, 144.0],
    [161.0, 137.0], [165.0, 131.0], [171.0, 122.0], [174.0, 118.0], [176.0, 114.0], [177.0, 112.0], [177.0, 114.0], [175.0, 116.0],
    [173.0, 118.0],
];

pub(super) const CARET: &[[Real; 2]] = &[
    [79.0, 245.0], [79.0, 242.0], [79.0, 239.0], [80.0, 237.0], [80.0, 234.0], [81.0, 232.0], [82.0, 230.0], [84.0, 224.0],
    [86.0, 220.0], [86.0, 218.0], [87.0, 216.0], [88.0, 213.0], [90.0, 207.0], [91.0, 202.0], [92.0, 200.0], [93.0, 194.0],
    [94.0, 192.0], [96.0, 189.0], [97.0, 186.0], [100.0, 179.0], [102.0, 173.0], [105.0, 165.0], [107.0, 160.0], [109.0, 158.0],
    [112.0, 151.0], [115.0, 144.0], [117.0, 139.0], [119.0, 136.0], [119.0, 134.0], [120.0, 132.0], [121.0, 129.0], [122.0, 127.0],
    [124.0, 125.0], [126.0, 124.0], [129.0, 125.0], [131.0, 127.0], [132.0, 130.0], [136.0, 139.0], [141.0, 154.0], [145.0, 166.0],
    [151.0, 182.0], [156.0, 193.0], [157.0, 196.0], [161.0, 209.0], [162.0, 211.0], [167.0, 223.0], [169.0, 229.0], [170.0, 231.0],
    [173.0, 237.0], [176.0, 242.0], [177.0, 244.0], [179.0, 250.0], [181.0, 255.0], [182.0, 257.0],
];

pub(super) const ZIGZAG: &[[Real; 2]] = &[
    [307.0, 216.0], [333.0, 186.0], [356.0, 215.0], [375.0, 186.0], [399.0, 216.0], [418.0, 186.0],
];

pub(super) const ARROW: &[[Real; 2]] = &[
    [68.0, 222.0], [70.0, 220.0], [73.0, 218.0], [75.0, 217.0], [77.0, 215.0], [80.0, 213.0], [82.0, 212.0], [84.0, 210.0],
    [87.0, 209.0], [89.0, 208.0], [92.0, 206.0], [95.0, 204.0], [101.0, 201.0], [106.0, 198.0], [112.0, 194.0], [118.0, 191.0],
    [124.0, 187.0], [127.0, 186.0], [132.0, 183.0], [138.0, 181.0], [141.0, 180.0], [146.0, 178.0], [154.0, 173.0], [159.0, 171.0],
    [161.0, 170.0], [166.0, 167.0], [168.0, 167.0], [171.0, 166.0], [174.0, 164.0], [177.0, 162.0], [180.0, 160.0], [182.0, 158.0],
    [183.0, 156.0], [181.0, 154.0], [178.0, 153.0], [171.0, 153.0], [164.0, 153.0], [160.0, 153.0], [150.0, 154.0], [147.0, 155.0],
    [141.0, 157.0], [137.0, 158.0], [135.0, 158.0], [137.0, 158.0], [140.0, 157.0], [143.0, 156.0], [151.0, 154.0], [160.0, 152.0],
    [170.0, 149.0], [179.0, 147.0], [185.0, 145.0], [192.0, 144.0], [196.0, 144.0], [198.0, 144.0], [200.0, 144.0], [201.0, 147.0],
    [199.0, 149.0], [194.0, 157.0], [191.0, 160.0], [186.0, 167.0], [180.0, 176.0], [177.0, 179.0], [171.0, 187.0], [169.0, 189.0],
    [165.0, 194.0], [164.0, 196.0],
];

pub(super) const LEFT_SQUARE_BRACKET: &[[Real; 2]] = &[
    [140.0, 124.0], [138.0, 123.0], [135.0, 122.0], [133.0, 123.0], [130.0, 123.0], [128.0, 124.0], [125.0, 125.0], [122.0, 124.0],
    [120.0, 124.0], [118.0, 124.0], [116.0, 125.0], [113.0, 125.0], [111.0, 125.0], [108.0, 124.0], [106.0, 125.0], [104.0, 125.0],
    [102.0, 124.0], [100.0, 123.0], [98.0, 123.0], [95.0, 124.0], [93.0, 123.0], [90.0, 124.0], [88.0, 124.0], [85.0, 125.0],
    [83.0, 126.0], [81.0, 127.0], [81.0, 129.0], [82.0, 131.0], [82.0, 134.0], [83.0, 138.0], [84.0, 141.0], [84.0, 144.0],
    [85.0, 148.0], [85.0, 151.0], [86.0, 156.0], [86.0, 160.0], [86.0, 164.0], [86.0, 168.0], [87.0, 171.0], [87.0, 175.0],
    [87.0, 179.0], [87.0, 182.0], [87.0, 186.0], [88.0, 188.0], [88.0, 195.0], [88.0, 198.0], [88.0, 201.0], [88.0, 207.0],
    [89.0, 211.0], [89.0, 213.0], [89.0, 217.0], [89.0, 222.0], [88.0, 225.0], [88.0, 229.0], [88.0, 231.0], [88.0, 233.0],
    [88.0, 235.0], [89.0, 237.0], [89.0, 240.0], [89.0, 242.0], [91.0, 241.0], [94.0, 241.0], [96.0, 240.0], [98.0, 239.0],
    [105.0, 240.0], [109.0, 240.0], [113.0, 239.0], [116.0, 240.0], [121.0, 239.0], [130.0, 240.0], [136.0, 237.0], [139.0, 237.0],
    [144.0, 238.0], [151.0, 237.0], [157.0, 236.0], [159.0, 237.0],
];

pub(super) const RIGHT_SQUARE_BRACKET: &[[Real; 2]] = &[
    [112.0, 138.0], [112.0, 136.0], [115.0, 136.0], [118.0, 137.0], [120.0, 136.0], [123.0, 136.0], [125.0, 136.0], [128.0, 136.0],
    [131.0, 136.0], [134.0, 135.0], [137.0, 135.0], [140.0, 134.0], [143.0, 133.0], [145.0, 132.0], [147.0, 132.0], [149.0, 132.0],
    [152.0, 132.0], [153.0, 134.0], [154.0, 137.0], [155.0, 141.0], [156.0, 144.0], [157.0, 152.0], [158.0, 161.0], [160.0, 170.0],
    [162.0, 182.0], [164.0, 192.0], [166.0, 200.0], [167.0, 209.0], [168.0, 214.0], [168.0, 216.0], [169.0, 221.0], [169.0, 223.0],
    [169.0, 228.0], [169.0, 231.0], [166.0, 233.0], [164.0, 234.0], [161.0, 235.0], [155.0, 236.0], [147.0, 235.0], [140.0, 233.0],
    [131.0, 233.0], [124.0, 233.0], [117.0, 235.0], [114.0, 238.0], [112.0, 238.0],
];

pub(super) const V: &[[Real; 2]] = &[
    [89.0, 164.0], [90.0, 162.0], [92.0, 162.0], [94.0, 164.0], [95.0, 166.0], [96.0, 169.0], [97.0, 171.0], [99.0, 175.0],
    [101.0, 178.0], [103.0, 182.0], [106.0, 189.0], [108.0, 194.0], [111.0, 199.0], [114.0, 204.0], [117.0, 209.0], [119.0, 214.0],
    [122.0, 218.0], [124.0, 222.0], [126.0, 225.0], [128.0, 228.0], [130.0, 229.0], [133.0, 233.0], [134.0, 236.0], [136.0, 239.0],
    [138.0, 240.0], [139.0, 242.0], [140.0, 244.0], [142.0, 242.0], [142.0, 240.0], [142.0, 237.0], [143.0, 235.0], [143.0, 233.0],
    [145.0, 229.0], [146.0, 226.0], [148.0, 217.0], [149.0, 208.0], [149.0, 205.0], [151.0, 196.0], [151.0, 193.0], [153.0, 182.0],
    [155.0, 172.0], [157.0, 165.0], [159.0, 160.0], [162.0, 155.0], [164.0, 150.0], [165.0, 148.0], [166.0, 146.0],
];

pub(super) const DELETE: &[[Real; 2]] = &[
    [123.0, 129.0], [123.0, 131.0], [124.0, 133.0], [125.0, 136.0], [127.0, 140.0], [129.0, 142.0], [133.0, 148.0], [137.0, 154.0],
    [143.0, 158.0], [145.0, 161.0], [148.0, 164.0], [153.0, 170.0], [158.0, 176.0], [160.0, 178.0], [164.0, 183.0], [168.0, 188.0],
    [171.0, 191.0], [175.0, 196.0], [178.0, 200.0], [180.0, 202.0], [181.0, 205.0], [184.0, 208.0], [186.0, 210.0], [187.0, 213.0],
    [188.0, 215.0], [186.0, 212.0], [183.0, 211.0], [177.0, 208.0], [169.0, 206.0], [162.0, 205.0], [154.0, 207.0], [145.0, 209.0],
    [137.0, 210.0], [129.0, 214.0], [122.0, 217.0], [118.0, 218.0], [111.0, 221.0], [109.0, 222.0], [110.0, 219.0], [112.0, 217.0],
    [118.0, 209.0], [120.0, 207.0], [128.0, 196.0], [135.0, 187.0], [138.0, 183.0], [148.0, 167.0], [157.0, 153.0], [163.0, 145.0],
    [165.0, 142.0], [172.0, 133.0], [177.0, 127.0], [179.0, 127.0], [180.0, 125.0],
];

pub(super) const LEFT_CURLY_BRACE: &[[Real; 2]] = &[
    [150.0, 116.0], [147.0, 117.0], [145.0, 116.0], [142.0, 116.0], [139.0, 117.0], [136.0, 117.0], [133.0, 118.0], [129.0, 121.0],
    [126.0, 122.0], [123.0, 123.0], [120.0, 125.0], [118.0, 127.0], [115.0, 128.0], [113.0, 129.0], [112.0, 131.0], [113.0, 134.0],
    [115.0, 134.0], [117.0, 135.0], [120.0, 135.0], [123.0, 137.0], [126.0, 138.0], [129.0, 140.0], [135.0, 143.0], [137.0, 144.0],
    [139.0, 147.0], [141.0, 149.0], [140.0, 152.0], [139.0, 155.0], [134.0, 159.0], [131.0, 161.0], [124.0, 166.0], [121.0, 166.0],
    [117.0, 166.0], [114.0, 167.0], [112.0, 166.0], [114.0, 164.0], [116.0, 163.0], [118.0, 163.0], [120.0, 162.0], [122.0, 163.0],
    [125.0, 164.0], [127.0, 165.0], [129.0, 166.0], [130.0, 168.0], [129.0, 171.0], [127.0, 175.0], [125.0, 179.0], [123.0, 184.0],
    [121.0, 190.0], [120.0, 194.0], [119.0, 199.0], [120.0, 202.0], [123.0, 207.0], [127.0, 211.0], [133.0, 215.0], [142.0, 219.0],
    [148.0, 220.0], [151.0, 221.0],
];

pub(super) const RIGHT_CURLY_BRACE: &[[Real; 2]] = &[
    [117.0, 132.0], [115.0, 132.0], [115.0, 129.0], [117.0, 129.0], [119.0, 128.0], [122.0, 127.0], [125.0, 127.0], [127.0, 127.0],
    [130.0, 127.0], [133.0, 129.0], [136.0, 129.0], [138.0, 130.0], [140.0, 131.0], [143.0, 134.0], [144.0, 136.0], [145.0, 139.0],
    [145.0, 142.0], [145.0, 145.0], [145.0, 147.0], [145.0, 149.0], [144.0, 152.0], [142.0, 157.0], [141.0, 160.0], [139.0, 163.0],
    [137.0, 166.0], [135.0, 167.0], [133.0, 169.0], [131.0, 172.0], [128.0, 173.0], [126.0, 176.0], [125.0, 178.0], [125.0, 180.0],
    [125.0, 182.0], [126.0, 184.0], [128.0, 187.0], [130.0, 187.0], [132.0, 188.0], [135.0, 189.0], [140.0, 189.0], [145.0, 189.0],
    [150.0, 187.0], [155.0, 186.0], [157.0, 185.0], [159.0, 184.0], [156.0, 185.0], [154.0, 185.0], [149.0, 185.0], [145.0, 187.0],
    [141.0, 188.0], [136.0, 191.0], [134.0, 191.0], [131.0, 192.0], [129.0, 193.0], [129.0, 195.0], [129.0, 197.0], [131.0, 200.0],
    [133.0, 202.0], [136.0, 206.0], [139.0, 211.0], [142.0, 215.0], [145.0, 220.0], [147.0, 225.0], [148.0, 231.0], [147.0, 239.0],
    [144.0, 244.0], [139.0, 248.0], [134.0, 250.0], [126.0, 253.0], [119.0, 253.0], [115.0, 253.0],
];

pub(super) const STAR: &[[Real; 2]] = &[
    [75.0, 250.0], [75.0, 247.0], [77.0, 244.0], [78.0, 242.0], [79.0, 239.0], [80.0, 237.0], [82.0, 234.0], [82.0, 232.0],
    [84.0, 229.0], [85.0, 225.0], [87.0, 222.0], [88.0, 219.0], [89.0, 216.0], [91.0, 212.0], [92.0, 208.0], [94.0, 204.0],
    [95.0, 201.0], [96.0, 196.0], [97.0, 194.0], [98.0, 191.0], [100.0, 185.0], [102.0, 178.0], [104.0, 173.0], [104.0, 171.0],
    [105.0, 164.0], [106.0, 158.0], [107.0, 156.0], [107.0, 152.0], [108.0, 145.0], [109.0, 141.0], [110.0, 139.0], [112.0, 133.0],
    [113.0, 131.0], [116.0, 127.0], [117.0, 125.0], [119.0, 122.0], [121.0, 121.0], [123.0, 120.0], [125.0, 122.0], [125.0, 125.0],
    [127.0, 130.0], [128.0, 133.0], [131.0, 143.0], [136.0, 153.0], [140.0, 163.0], [144.0, 172.0], [145.0, 175.0], [151.0, 189.0],
    [156.0, 201.0], [161.0, 213.0], [166.0, 225.0], [169.0, 233.0], [171.0, 236.0], [174.0, 243.0], [177.0, 247.0], [178.0, 249.0],
    [179.0, 251.0], [180.0, 253.0], [180.0, 255.0], [179.0, 257.0], [177.0, 257.0], [174.0, 255.0], [169.0, 250.0], [164.0, 247.0],
    [160.0, 245.0], [149.0, 238.0], [138.0, 230.0], [127.0, 221.0], [124.0, 220.0], [112.0, 212.0], [110.0, 210.0], [96.0, 201.0],
    [84.0, 195.0], [74.0, 190.0], [64.0, 182.0], [55.0, 175.0], [51.0, 172.0], [49.0, 170.0], [51.0, 169.0], [56.0, 169.0],
    [66.0, 169.0], [78.0, 168.0], [92.0, 166.0], [107.0, 164.0], [123.0, 161.0], [140.0, 162.0], [156.0, 162.0], [171.0, 160.0],
    [173.0, 160.0], [186.0, 160.0], [195.0, 160.0], [198.0, 161.0], [203.0, 163.0], [208.0, 163.0], [206.0, 164.0], [200.0, 167.0],
    [187.0, 172.0], [174.0, 179.0], [172.0, 181.0], [153.0, 192.0], [137.0, 201.0], [123.0, 211.0], [112.0, 220.0], [99.0, 229.0],
    [90.0, 237.0], [80.0, 244.0], [73.0, 250.0], [69.0, 254.0], [69.0, 252.0],
];

pub(super) const PIGTAIL: &[[Real; 2]] = &[
    [81.0, 219.0], [84.0, 218.0], [86.0, 220.0], [88.0, 220.0], [90.0, 220.0], [92.0, 219.0], [95.0, 220.0], [97.0, 219.0],
    [99.0, 220.0], [102.0, 218.0], [105.0, 217.0], [107.0, 216.0], [110.0, 216.0], [113.0, 214.0], [116.0, 212.0], [118.0, 210.0],
    [121.0, 208.0], [124.0, 205.0], [126.0, 202.0], [129.0, 199.0], [132.0, 196.0], [136.0, 191.0], [139.0, 187.0], [142.0, 182.0],
    [144.0, 179.0], [146.0, 174.0], [148.0, 170.0], [149.0, 168.0], [151.0, 162.0], [152.0, 160.0], [152.0, 157.0], [152.0, 155.0],
    [152.0, 151.0], [152.0, 149.0], [152.0, 146.0], [149.0, 142.0], [148.0, 139.0], [145.0, 137.0], [141.0, 135.0], [139.0, 135.0],
    [134.0, 136.0], [130.0, 140.0], [128.0, 142.0], [126.0, 145.0], [122.0, 150.0], [119.0, 158.0], [117.0, 163.0], [115.0, 170.0],
    [114.0, 175.0], [117.0, 184.0], [120.0, 190.0], [125.0, 199.0], [129.0, 203.0], [133.0, 208.0], [138.0, 213.0], [145.0, 215.0],
    [155.0, 218.0], [164.0, 219.0], [166.0, 219.0], [177.0, 219.0], [182.0, 218.0], [192.0, 216.0], [196.0, 213.0], [199.0, 212.0],
    [201.0, 211.0],
];

use ndarray::array;

use crate::submodules::{dataset::{FigureLayout, FissionDistribution, LegendCorner, PicardDataset}, snapshots::LayerTable};

/// Early coupled run: 18 Picard iterations with the fission distribution
/// expanded to Zernike order 6.
pub fn dataset() -> PicardDataset {
    let fuel_average_coeffs = array![1439.57, 1482.51, 1511.48, 1531.59, 1545.76, 1555.95,
        1563.34, 1568.85, 1573.03, 1576.25, 1578.77, 1580.83, 1582.59, 1584.04,
        1585.30, 1586.41, 1587.42, 1588.30];

    // track-length estimator
    let k_eff = array![0.421719, 0.422127, 0.421879, 0.421812, 0.421915, 0.421821, 0.42172, 0.421708, 0.421772,
        0.421711, 0.421784, 0.421817, 0.421824, 0.421715, 0.421949, 0.421899, 0.421895, 0.422068];

    let fission_coeffs = array![
        [1.86772e+07, 12449.1, -1.48766e+06, -10169.0, 72822.6, -879879.0, 3092.37, -5535.34, -60986.7, -307155.0, 8553.63, 558.366, 56976.6, -77558.0, -95028.0, 457.528, 2710.82, -4701.0, 858.016, -38431.0, 114884.0, -14353.3, -3374.94, 3712.83, -39642.7, 21163.2, -11713.2, 81546.9],
        [1.86985e+07, -11415.5, -1.48688e+06, 1069.34, 62693.9, -865043.0, -5424.01, 876.318, -56269.3, -321145.0, -5509.35, -4747.37, 63485.4, -71465.2, -90257.3, -4394.98, -4780.25, 6528.51, -16033.7, -53364.2, 117758.0, 4823.69, 6644.55, 2089.21, -37899.1, 4429.43, -18406.0, 86270.1],
        [1.86793e+07, -4024.75, -1.48474e+06, -14315.9, 64506.3, -875612.0, 14566.4, 4782.16, -62249.8, -318467.0, -2566.22, 11978.9, 76229.2, -78696.2, -93792.5, -9560.16, -2789.79, 1296.25, -118.875, -44478.1, 111818.0, 1550.86, -7342.13, 5294.45, -33367.8, 20018.2, -20693.8, 67572.9],
        [1.86846e+07, -5728.31, -1.48819e+06, 3333.78, 68372.8, -857097.0, -1097.6, -3681.0, -60385.3, -321964.0, -5507.88, -10994.4, 77474.9, -67018.7, -97674.8, 3675.44, 911.602, 2559.28, -14981.5, -55670.0, 106678.0, 3608.07, 717.454, -4560.64, -40642.4, 12882.2, -16418.5, 79130.7],
        [1.86716e+07, -3083.63, -1.48338e+06, 5729.75, 64547.9, -875216.0, 2588.76, -1388.48, -61801.2, -321758.0, -4851.47, -3498.74, 70644.1, -62558.6, -87237.5, 20313.5, -913.266, -2551.95, -11515.6, -51186.2, 101826.0, 2358.64, 10372.3, 7684.41, -41282.7, 19516.5, -23997.9, 81046.6],
        [1.86845e+07, -6078.49, -1.50164e+06, -9094.84, 70326.3, -863574.0, -2444.41, -6195.36, -60391.1, -315169.0, -2339.58, 7430.67, 75010.0, -68856.6, -90619.2, -1070.57, -7348.31, -3195.11, -2345.05, -33371.8, 114568.0, 1664.41, -8628.38, -11474.5, -44941.5, 18904.0, -17080.2, 80249.8],
        [1.86791e+07, -6270.54, -1.49232e+06, -6087.77, 79094.4, -868517.0, -6530.59, 1170.77, -57678.3, -319079.0, 2499.11, 7048.65, 72741.4, -69845.3, -102783.0, -5326.95, 962.636, 6111.5, 3522.89, -47742.5, 104357.0, 9275.77, -3992.05, 82.3932, -46982.0, 19129.1, -21059.2, 82726.5],
        [1.86805e+07, 2419.65, -1.49026e+06, -7014.91, 64324.6, -865304.0, 15365.6, 4530.5, -68377.4, -317719.0, -5183.91, -6173.39, 79948.3, -70609.6, -97860.5, -5315.75, -4775.9, 5733.06, 1395.88, -46124.1, 111140.0, 7566.72, -601.264, 9914.73, -34005.7, 20641.0, -10132.3, 79909.6],
        [1.86868e+07, 246.504, -1.48643e+06, 12563.2, 68823.5, -869013.0, 790.508, 9311.88, -53669.8, -311987.0, 10569.3, -724.949, 69479.4, -74068.1, -94135.9, -1860.26, -8156.87, -9006.99, -11313.5, -54009.4, 105116.0, -5419.25, 5089.02, 6663.76, -30288.6, 19437.7, -10826.1, 88166.6],
        [1.86832e+07, -1594.18, -1.47434e+06, -76.7145, 64918.3, -873405.0, -98.1967, -1411.1, -66669.3, -317823.0, -4207.23, 1639.69, 69823.6, -59543.4, -103386.0, 9457.31, 1645.11, -1699.32, -9808.61, -57914.6, 108194.0, -4062.43, 2686.55, -923.993, -36034.5, 14084.3, -27128.8, 83236.0],
        [1.86799e+07, -727.453, -1.49321e+06, 5722.53, 84747.5, -870741.0, 4282.13, 3120.76, -54079.9, -321019.0, 1963.3, -9176.73, 60015.2, -66844.0, -95260.6, 1091.74, -9611.42, -4859.96, 3877.49, -43720.9, 108811.0, -6658.91, -925.896, 4622.89, -30487.7, -2613.39, -31882.7, 79400.0],
        [1.86794e+07, -1592.77, -1.48527e+06, 4161.12, 69496.3, -867846.0, 1905.36, -3189.36, -68353.1, -323094.0, 1328.14, -257.742, 74388.0, -71999.0, -92630.3, -6455.22, -3061.33, -3319.52, 2824.85, -38228.1, 113201.0, 9598.49, 7344.29, 4025.45, -37811.3, 27356.2, -22121.1, 80752.3],
        [1.86955e+07, -3056.89, -1.49278e+06, 1594.52, 74821.5, -866594.0, 91.4048, 7598.9, -61192.7, -317565.0, -2576.95, -7194.88, 67396.8, -69186.6, -93715.5, 9921.8, 4108.15, -3258.48, -16630.6, -53884.2, 98726.5, 3004.53, 4042.61, -1800.44, -45241.5, 22989.0, -8483.57, 86079.4],
        [1.86838e+07, -2639.49, -1.49403e+06, -4723.08, 70033.0, -868060.0, -1814.44, -5418.7, -56717.8, -314570.0, 16186.0, 3771.66, 64436.6, -76533.0, -97021.4, 2081.44, -515.023, -3447.73, -7111.49, -49107.1, 101263.0, -5145.72, -2229.72, 73.5906, -27636.3, 4576.2, -32476.1, 82266.3],
        [1.86892e+07, -5589.98, -1.48784e+06, 9459.11, 78491.0, -861880.0, -3901.28, -2472.97, -67027.5, -317894.0, 13495.5, 12562.3, 68668.1, -67288.8, -95354.6, -11881.8, -12999.6, -7886.56, 702.862, -47743.4, 109691.0, -492.987, -2930.91, -3289.75, -37070.9, 12245.8, -21235.7, 75717.3],
        [1.86922e+07, -899.186, -1.47996e+06, -1808.58, 77947.2, -878259.0, 5690.32, 4417.46, -65194.5, -318666.0, 11953.3, 1543.14, 63242.5, -69731.8, -92345.4, -8476.86, 4136.75, 5606.91, -2889.94, -35785.6, 113946.0, 7106.39, 4068.18, 639.482, -27697.1, 23240.8, -19423.2, 75973.2],
        [1.86976e+07, -817.755, -1.50019e+06, 6799.24, 72849.0, -867574.0, -12029.7, 3725.91, -60035.0, -318573.0, -2442.99, 1791.85, 70060.7, -53820.1, -86168.0, 16254.3, -934.64, -7476.61, 5402.33, -37227.7, 104815.0, 41.4137, -1488.4, 6135.81, -35934.4, 7338.01, -15201.0, 74638.4],
        [1.86898e+07, 3467.57, -1.47627e+06, -2050.93, 79261.8, -868212.0, -3706.82, 1300.27, -62279.8, -317535.0, 1586.62, -6328.81, 58038.8, -69473.7, -97470.8, -9709.4, -3996.16, 174.866, -14382.9, -65012.5, 110913.0, 11309.7, -408.375, -6240.92, -27685.2, 23499.5, 160.072, 89390.2],
    ];

    let fluid_layer_temps = array![
        [549.396, 548.986, 548.932, 548.928],
        [549.003, 548.093, 547.884, 547.845],
        [548.71, 547.332, 546.883, 546.778],
        [548.471, 546.672, 545.945, 545.742],
        [548.267, 546.086, 545.073, 544.748],
        [548.087, 545.56, 544.263, 543.803],
        [547.925, 545.082, 543.511, 542.912],
        [547.779, 544.644, 542.812, 542.075],
        [547.645, 544.242, 542.163, 541.292],
        [547.522, 543.87, 541.56, 540.561],
        [547.409, 543.527, 540.999, 539.88],
        [547.305, 543.208, 540.478, 539.245],
        [547.208, 542.913, 539.994, 538.655],
        [547.118, 542.639, 539.544, 538.105],
        [547.035, 542.385, 539.126, 537.594],
        [546.957, 542.148, 538.737, 537.118],
        [546.885, 541.929, 538.376, 536.676],
        [546.818, 541.725, 538.04, 536.265],
    ];

    PicardDataset {
        name: "preliminary_results",
        fuel_average_coeffs,
        fuel_series_offset: 0,
        k_eff,
        fluid_layer_temps: LayerTable { temps: fluid_layer_temps },
        inlet_temps: [550.0; 4],
        snapshot_iterations: vec![5, 10, 15, 16, 17],
        fission_distribution: Some(FissionDistribution { zernike_order: 6, coeffs: fission_coeffs }),
        layout: FigureLayout {
            layer_centroid_range: 0.0..1.0,
            layer_temp_range: 536.0..551.0,
            layer_legend: LegendCorner::LowerLeft,
            temp_legend: LegendCorner::UpperRight,
            k_eff_legend: LegendCorner::UpperRight,
        },
    }
}

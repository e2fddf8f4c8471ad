// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Layout of `APT.txt`.
//!
//! Offsets are zero-based and half-open. Some of them are off by one
//! against the printed FAA layout; they match the files as published.

use crate::coerce::DateLayout::*;
use crate::layout::Coerce::*;
use crate::layout::Column;

pub(crate) static LAYOUTS: &[(&str, &[Column])] = &[
    ("APT", APT),
    ("ATT", ATT),
    ("RWY", RWY),
    ("ARS", &[]),
    ("RMK", RMK),
];

const APT: &[Column] = columns![
    ("id", 3, 13),
    ("landing_facility_type", 14, 27),
    ("location_identifier", 27, 31),
    ("effective_date", 31, 41, Date(MonthDayYear)),
    ("region_code", 41, 44),
    ("faa_district_code", 44, 48),
    ("state_code", 48, 50),
    ("state_name", 50, 70),
    ("county_name", 70, 91),
    ("county_state", 91, 93),
    ("city_name", 93, 133),
    ("facility_name", 133, 183),
    ("ownership_type", 183, 185),
    ("facility_use", 185, 187),
    ("owner_name", 187, 222),
    ("owner_address", 222, 294),
    ("owner_address2", 294, 339),
    ("owner_phone", 339, 355),
    ("manager_name", 355, 390),
    ("manager_address", 390, 462),
    ("manager_address2", 462, 507),
    ("manager_phone", 507, 523),
    ("latitude", 523, 538, Coordinate),
    ("longitude", 550, 565, Coordinate),
    ("location_surveyed", 577, 578, Surveyed),
    ("elevation", 578, 585, Float),
    ("elevation_surveyed", 585, 586, Surveyed),
    ("magnetic_variation", 586, 589, MagneticVariation),
    ("magnetic_epoch_year", 589, 593, Integer),
    ("tpa", 593, 597, Integer),
    ("sectional", 597, 627),
    ("associated_city_distance", 627, 629, Integer),
    ("associated_city_direction", 629, 632),
    ("land_covered", 632, 637),
    ("boundary_artcc_id", 637, 641),
    ("boundary_artcc_computer_id", 641, 644),
    ("boundary_artcc_name", 644, 674),
    ("responsible_artcc_id", 674, 678),
    ("responsible_artcc_computer_id", 678, 681),
    ("responsible_artcc_name", 681, 711),
    ("fss_on_site", 711, 712, Boolean),
    ("fss_id", 712, 716),
    ("fss_name", 716, 746),
    ("fss_admin_phone", 746, 762),
    ("fss_pilot_phone", 762, 778),
    ("alt_fss_id", 778, 782),
    ("alt_fss_name", 782, 812),
    ("alt_fss_pilot_phone", 812, 828),
    ("notam_facility_id", 828, 832),
    ("notam_d_avail", 832, 833, Boolean),
    ("activation_date", 833, 840, Date(MonthYear)),
    ("status_code", 840, 842),
    ("arff_certification_type", 842, 857),
    ("agreements_code", 857, 864),
    ("airspace_analysis_det", 864, 877),
    ("entry_for_customs", 877, 878, Boolean),
    ("landing_rights", 878, 879, Boolean),
    ("mil_civ_joint_use", 879, 880, Boolean),
    ("mil_landing_rights", 880, 881, Boolean),
    ("inspection_method", 881, 883),
    ("inspection_agency", 883, 884),
    ("inspection_date", 884, 892, Date(Compact)),
    ("information_request_date", 892, 900),
    ("fuel_types_avail", 900, 940),
    ("airframe_repair_avail", 940, 945),
    ("powerplant_repair_avail", 945, 950),
    ("oxygen_avail", 950, 958),
    ("bulk_oxygen_avail", 958, 966),
    ("lighting_schedule", 966, 973),
    ("beacon_schedule", 973, 980),
    ("tower_onsite", 980, 981, Boolean),
    ("unicom_freq", 981, 988, Float),
    ("ctaf_freq", 988, 995, Float),
    ("segmented_circle", 995, 999),
    ("beacon_lens_color", 999, 1002),
    ("non_commerical_ldg_fee", 1002, 1003, Boolean),
    ("medical_use", 1003, 1004, Boolean),
    ("num_se_aircraft", 1004, 1007, Integer),
    ("num_me_aircraft", 1007, 1010, Integer),
    ("num_jet_aircraft", 1010, 1013, Integer),
    ("num_helicopters", 1013, 1016, Integer),
    ("num_gliders", 1016, 1019, Integer),
    ("num_mil_aircraft", 1019, 1022, Integer),
    ("num_ultralight", 1022, 1025, Integer),
    ("ops_commerical", 1025, 1031, Integer),
    ("ops_commuter", 1031, 1037, Integer),
    ("ops_air_taxi", 1037, 1043, Integer),
    ("ops_general_local", 1043, 1049, Integer),
    ("ops_general_iternant", 1049, 1055, Integer),
    ("ops_military", 1055, 1061, Integer),
    ("operations_date", 1061, 1071, Date(MonthDayYear)),
    ("position_source", 1071, 1087),
    ("position_date", 1087, 1097, Date(MonthDayYear)),
    ("elevation_source", 1097, 1113),
    ("elevation_date", 1113, 1123, Date(MonthDayYear)),
    ("contract_fuel_avail", 1123, 1124),
    ("transient_storage_facilities", 1124, 1136),
    ("other_services", 1136, 1207),
    ("wind_indicator", 1207, 1210),
    ("icao_identifier", 1210, 1217),
];

const ATT: &[Column] = columns![
    ("airport_id", 3, 13),
    ("attendance_schedule", 18, 125),
];

const RWY: &[Column] = columns![
    ("airport_id", 3, 13),
    ("name", 16, 23),
    ("length", 23, 28, Integer),
    ("width", 28, 32, Integer),
    ("surface_type", 32, 44),
    ("surface_treatment", 44, 49),
    ("pavement_classification", 49, 60),
    ("lights_intensity", 60, 65),
    ("base_id", 65, 68),
    ("base_true_hdg", 68, 71, Integer),
    ("base_ils_type", 71, 81),
    ("base_rh_traffic", 81, 82, Boolean),
    ("base_markings", 82, 87),
    ("base_markings_condition", 87, 88),
    ("base_latitude", 88, 103, Coordinate),
    ("base_longitude", 115, 130, Coordinate),
    ("base_elevation", 142, 149, Float),
    ("base_threshold_height", 149, 152, Integer),
    ("base_glide_angle", 152, 156, Float),
    ("base_disp_threshold_latitude", 156, 171, Coordinate),
    ("base_disp_threshold_longitude", 183, 198, Coordinate),
    ("base_disp_threshold_elevation", 210, 217, Float),
    ("base_disp_threshold_distance", 217, 221, Float),
    ("base_touchdown_elevation", 221, 228, Float),
    ("base_glideslope_indicators", 228, 233),
    ("base_visual_range_equip", 233, 236),
    ("base_visual_range_avail", 236, 237, Boolean),
    ("base_app_lighting", 237, 245),
    ("base_reil_avail", 245, 246, Boolean),
    ("base_center_lights_avail", 246, 247, Boolean),
    ("base_touchdown_lights_avail", 247, 248, Boolean),
    ("base_obstacle_description", 248, 259),
    ("base_obstacle_lighting", 259, 263),
    ("base_obstacle_category", 263, 268),
    ("base_obstacle_slope", 268, 270, Integer),
    ("base_obstacle_height", 270, 275, Integer),
    ("base_obstacle_distance", 275, 280, ObstacleDistance),
    ("base_obstacle_offset", 280, 287, ObstacleOffset),
    ("recip_id", 287, 290),
    ("recip_true_hdg", 290, 293, Integer),
    ("recip_ils_type", 293, 303),
    ("recip_rh_traffic", 303, 304, Boolean),
    ("recip_markings", 304, 309),
    ("recip_markings_condition", 309, 310),
    ("recip_latitude", 310, 325, Coordinate),
    ("recip_longitude", 337, 352, Coordinate),
    ("recip_elevation", 364, 371, Float),
    ("recip_threshold_height", 371, 374, Integer),
    ("recip_glide_angle", 374, 378, Float),
    ("recip_disp_threshold_latitude", 378, 393, Coordinate),
    ("recip_disp_threshold_longitude", 405, 420, Coordinate),
    ("recip_disp_threshold_elevation", 432, 439, Float),
    ("recip_disp_threshold_distance", 439, 443, Float),
    ("recip_touchdown_elevation", 443, 450, Float),
    ("recip_glideslope_indicators", 450, 455),
    ("recip_visual_range_equip", 455, 458),
    ("recip_visual_range_avail", 458, 459, Boolean),
    ("recip_app_lighting", 459, 467),
    ("recip_reil_avail", 467, 468, Boolean),
    ("recip_center_lights_avail", 468, 469, Boolean),
    ("recip_touchdown_lights_avail", 469, 470, Boolean),
    ("recip_obstacle_description", 470, 481),
    ("recip_obstacle_lighting", 481, 485),
    ("recip_obstacle_category", 485, 490),
    ("recip_obstacle_slope", 490, 492, Integer),
    ("recip_obstacle_height", 492, 497, Integer),
    ("recip_obstacle_distance", 497, 502, ObstacleDistance),
    ("recip_obstacle_offset", 502, 509, ObstacleOffset),
    ("length_source", 509, 525),
    ("length_source_date", 525, 535, Date(MonthDayYear)),
    ("weight_cap_single_wheel", 535, 541, Integer),
    ("weight_cap_dual_wheel", 541, 547, Integer),
    ("weight_cap_two_dual_wheel", 547, 553, Integer),
    ("weight_cap_tandem_dual_wheel", 553, 559, Integer),
    ("base_gradient", 559, 568, Gradient),
    ("base_position_source", 568, 584),
    ("base_position_source_date", 584, 594, Date(MonthDayYear)),
    ("base_elevation_source", 594, 610),
    ("base_elevation_source_date", 610, 620, Date(MonthDayYear)),
    ("base_disp_threshold_source", 620, 636),
    ("base_disp_threshold_source_date", 636, 646, Date(MonthDayYear)),
    ("base_disp_threshold_elevation_source", 646, 662),
    ("base_disp_threshold_elevation_source_date", 662, 672, Date(MonthDayYear)),
    ("base_takeoff_run", 698, 703, Integer),
    ("base_takeoff_distance", 703, 708, Integer),
    ("base_aclt_stop_distance", 708, 713, Integer),
    ("base_landing_distance", 713, 718, Integer),
    ("base_lahso_distance", 718, 723, Integer),
    ("base_intersecting_runway_id", 723, 730),
    ("base_hold_short_description", 730, 770),
    ("base_lahso_position_latitude", 770, 785, Coordinate),
    ("base_lahso_position_longitude", 797, 812, Coordinate),
    ("base_lahso_source", 824, 840),
    ("base_lahso_source_date", 840, 850, Date(MonthDayYear)),
    ("recip_gradient", 850, 859, Gradient),
    ("recip_position_source", 859, 875),
    ("recip_position_source_date", 875, 885, Date(MonthDayYear)),
    ("recip_elevation_source", 885, 901),
    ("recip_elevation_source_date", 901, 911, Date(MonthDayYear)),
    ("recip_disp_threshold_source", 911, 927),
    ("recip_disp_threshold_source_date", 927, 937, Date(MonthDayYear)),
    ("recip_disp_threshold_elevation_source", 937, 953),
    ("recip_disp_threshold_elevation_source_date", 953, 963, Date(MonthDayYear)),
    ("recip_takeoff_run", 989, 994, Integer),
    ("recip_takeoff_distance", 994, 999, Integer),
    ("recip_aclt_stop_distance", 999, 1004, Integer),
    ("recip_landing_distance", 1004, 1009, Integer),
    ("recip_lahso_distance", 1009, 1014, Integer),
    ("recip_intersecting_runway_id", 1014, 1021),
    ("recip_hold_short_description", 1021, 1061),
    ("recip_lahso_position_latitude", 1061, 1076, Coordinate),
    ("recip_lahso_position_longitude", 1088, 1103, Coordinate),
    ("recip_lahso_source", 1115, 1131),
    ("recip_lahso_source_date", 1131, 1141, Date(MonthDayYear)),
];

const RMK: &[Column] = columns![
    ("airport_id", 3, 13),
    ("remark_name", 16, 28),
    ("remark", 29, 1528),
];

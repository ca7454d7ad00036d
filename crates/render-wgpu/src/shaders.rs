/// WGSL shader for the lit cube (`fs_phong`) and the lamp marker (`fs_lamp`).
///
/// Both pipelines share the vertex stage and the uniform layout; the lamp only
/// reads `view_proj`, `model` and `light_color`.
pub const PHONG_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    light_pos: vec4<f32>,
    view_pos: vec4<f32>,
    object_color: vec4<f32>,
    light_color: vec4<f32>,
    // ambient, diffuse, specular, shininess
    phong: vec4<f32>,
    // constant, linear, quadratic
    attenuation: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = uniforms.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = (uniforms.normal_matrix * vec4<f32>(vertex.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_phong(in: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(in.world_normal);
    let to_light = uniforms.light_pos.xyz - in.world_pos;
    let distance = length(to_light);
    let light_dir = to_light / max(distance, 0.0001);
    let view_dir = normalize(uniforms.view_pos.xyz - in.world_pos);
    let reflect_dir = reflect(-light_dir, normal);

    let light = uniforms.light_color.rgb;
    let ambient = uniforms.phong.x * light;
    let diffuse = uniforms.phong.y * max(dot(normal, light_dir), 0.0) * light;
    let specular = uniforms.phong.z
        * pow(max(dot(view_dir, reflect_dir), 0.0), uniforms.phong.w)
        * light;

    let att = uniforms.attenuation;
    let falloff = 1.0 / (att.x + att.y * distance + att.z * distance * distance);

    let color = (ambient + (diffuse + specular) * falloff) * uniforms.object_color.rgb;
    return vec4<f32>(color, 1.0);
}

@fragment
fn fs_lamp(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(uniforms.light_color.rgb, 1.0);
}
"#;
